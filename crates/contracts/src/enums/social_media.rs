use serde::{Deserialize, Serialize};

/// Мессенджер для связи с покупателем
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialMedia {
    #[default]
    Telegram,
    Viber,
    Whatsapp,
    Vk,
}

impl SocialMedia {
    pub fn code(&self) -> &'static str {
        match self {
            SocialMedia::Telegram => "telegram",
            SocialMedia::Viber => "viber",
            SocialMedia::Whatsapp => "whatsapp",
            SocialMedia::Vk => "vk",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SocialMedia::Telegram => "Telegram",
            SocialMedia::Viber => "Viber",
            SocialMedia::Whatsapp => "WhatsApp",
            SocialMedia::Vk => "ВКонтакте",
        }
    }

    pub fn all() -> Vec<SocialMedia> {
        vec![
            SocialMedia::Telegram,
            SocialMedia::Viber,
            SocialMedia::Whatsapp,
            SocialMedia::Vk,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
