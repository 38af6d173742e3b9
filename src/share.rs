use serde::{Deserialize, Serialize};
use urlencoding::encode;

pub const SHARE_MESSAGE: &str =
    "صدقة جارية على روح المرحوم حازم محمد عقل - اللهم اجعلها نورًا ورحمةً ورفعةً لدرجته";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub page: String,
    pub whatsapp: String,
    pub facebook: String,
}

pub fn whatsapp_url(page_url: &str) -> String {
    format!(
        "https://wa.me/?text={}%20{}",
        encode(SHARE_MESSAGE),
        encode(page_url)
    )
}

pub fn facebook_url(page_url: &str) -> String {
    format!("https://www.facebook.com/sharer/sharer.php?u={}", encode(page_url))
}

pub fn share_links(page_url: &str) -> ShareLinks {
    ShareLinks {
        page: page_url.to_string(),
        whatsapp: whatsapp_url(page_url),
        facebook: facebook_url(page_url),
    }
}
