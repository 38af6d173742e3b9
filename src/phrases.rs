use serde::{Serialize, Serializer};

pub const PHRASE_COUNT: usize = 4;

/// One of the four fixed phrases on the counter page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phrase {
    SubhanAllahWaBihamdih,
    Alhamdulillah,
    AllahuAkbar,
    AllahummaIrfaDarajatah,
}

impl Phrase {
    pub const ALL: [Phrase; PHRASE_COUNT] = [
        Phrase::SubhanAllahWaBihamdih,
        Phrase::Alhamdulillah,
        Phrase::AllahuAkbar,
        Phrase::AllahummaIrfaDarajatah,
    ];

    /// Canonical key, used in the persisted record.
    pub fn text(self) -> &'static str {
        match self {
            Phrase::SubhanAllahWaBihamdih => "سبحان الله وبحمده",
            Phrase::Alhamdulillah => "الحمد لله",
            Phrase::AllahuAkbar => "الله أكبر",
            Phrase::AllahummaIrfaDarajatah => "اللهم ارفع درجته",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Phrase::SubhanAllahWaBihamdih => "subhan-allah-wa-bihamdih",
            Phrase::Alhamdulillah => "alhamdulillah",
            Phrase::AllahuAkbar => "allahu-akbar",
            Phrase::AllahummaIrfaDarajatah => "allahumma-irfa-darajatah",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn shortcut(self) -> char {
        match self {
            Phrase::SubhanAllahWaBihamdih => '1',
            Phrase::Alhamdulillah => '2',
            Phrase::AllahuAkbar => '3',
            Phrase::AllahummaIrfaDarajatah => '4',
        }
    }

    /// Accepts either the phrase text or its slug.
    pub fn from_key(key: &str) -> Option<Phrase> {
        let key = key.trim();
        Phrase::ALL
            .into_iter()
            .find(|phrase| phrase.text() == key || phrase.slug() == key)
    }

    pub fn from_shortcut(key: char) -> Option<Phrase> {
        Phrase::ALL.into_iter().find(|phrase| phrase.shortcut() == key)
    }
}

impl Serialize for Phrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}
