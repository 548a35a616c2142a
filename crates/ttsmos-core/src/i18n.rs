use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "th" => Some(Language::Th),
            _ => None,
        }
    }

    /// Name shown in the language selector, in the language itself.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Th => "ไทย",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Th]
    }
}

/// Strings for the rating page.
#[derive(Debug)]
pub struct RatingText {
    pub title: &'static str,
    pub inferenced_text: &'static str,
    pub reference_voice: &'static str,
    pub audio_sample: &'static str,
    pub audio: &'static str,
    pub naturalness: &'static str,
    pub similarity: &'static str,
    pub instructions: &'static str,
    pub step1: &'static str,
    pub step2: &'static str,
    pub step3: &'static str,
    pub natural_desc: &'static str,
    pub similarity_desc: &'static str,
    pub natural_scale: &'static str,
    pub similarity_scale: &'static str,
    pub no_audio_support: &'static str,
}

static RATING_EN: RatingText = RatingText {
    title: "TTS Comparison and Rating",
    inferenced_text: "Inferenced Text",
    reference_voice: "Reference Voice",
    audio_sample: "Audio Sample",
    audio: "Audio",
    naturalness: "Naturalness",
    similarity: "Similarity",
    instructions: "Rating Instructions:",
    step1: "1. First listen to the Reference Voice at the top right",
    step2: "2. Then listen to each Audio Sample below",
    step3: "3. Rate each sample on two criteria:",
    natural_desc: "Naturalness: How natural the voice sounds (0 = robotic, 5 = human-like)",
    similarity_desc: "Similarity: How similar the voice is to the reference (0 = different person, 5 = same person)",
    natural_scale: "(0 = robotic, 5 = completely natural)",
    similarity_scale: "(0 = different person, 5 = same person)",
    no_audio_support: "Your browser does not support the audio element.",
};

static RATING_TH: RatingText = RatingText {
    title: "การเปรียบเทียบและการให้คะแนน TTS",
    inferenced_text: "ข้อความที่ใช้ทดสอบ",
    reference_voice: "เสียงอ้างอิง",
    audio_sample: "ตัวอย่างเสียง",
    audio: "เสียง",
    naturalness: "ความเป็นธรรมชาติ",
    similarity: "ความคล้ายคลึง",
    instructions: "คำแนะนำในการให้คะแนน:",
    step1: "1. ฟังเสียงอ้างอิงที่มุมบนขวาก่อน",
    step2: "2. จากนั้นฟังตัวอย่างเสียงแต่ละชิ้นด้านล่าง",
    step3: "3. ให้คะแนนแต่ละตัวอย่างตามเกณฑ์สองข้อ:",
    natural_desc: "ความเป็นธรรมชาติ: เสียงฟังดูเป็นธรรมชาติแค่ไหน (0 = เหมือนหุ่นยนต์, 5 = เหมือนมนุษย์)",
    similarity_desc: "ความคล้ายคลึง: เสียงมีความคล้ายคลึงกับเสียงอ้างอิงแค่ไหน (0 = คนละคน, 5 = คนเดียวกัน)",
    natural_scale: "(0 = เหมือนหุ่นยนต์, 5 = เป็นธรรมชาติอย่างสมบูรณ์)",
    similarity_scale: "(0 = คนละคน, 5 = คนเดียวกัน)",
    no_audio_support: "เบราว์เซอร์ของคุณไม่รองรับการเล่นเสียง",
};

impl RatingText {
    pub fn for_language(language: Language) -> &'static RatingText {
        match language {
            Language::En => &RATING_EN,
            Language::Th => &RATING_TH,
        }
    }
}

/// Strings for the results table page.
#[derive(Debug)]
pub struct TableText {
    pub title: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub model: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub seen_thai: &'static str,
    pub unseen_thai: &'static str,
    pub unseen_english: &'static str,
    pub unseen_thai_with_trans: &'static str,
    pub ratings: &'static str,
    pub footer: &'static str,
    pub notes: &'static str,
    /// Training-data notes, indexed by footnote marker minus one.
    pub note_lines: [&'static str; 3],
}

static TABLE_EN: TableText = TableText {
    title: "Naturalness Mean Opinion Score for TTS Models",
    loading: "Loading data...",
    load_failed: "Could not load the ratings table.",
    model: "Model",
    male: "Male",
    female: "Female",
    seen_thai: "Seen Thai",
    unseen_thai: "Unseen Thai",
    unseen_english: "Unseen English",
    unseen_thai_with_trans: "Unseen Thai w/ Trans.",
    ratings: "Total Ratings:",
    footer: "Table of averaged user ratings for TTS model comparison",
    notes: "Notes:",
    note_lines: [
        "Trained on Tsync2 + Commonvoice",
        "Trained on Tsync2 + LJSpeech + Commonvoice + VCTK",
        "Trained on Tsync2 + LJSpeech + Commonvoice + VCTK + Thai Central",
    ],
};

static TABLE_TH: TableText = TableText {
    title: "คะแนนความเห็นเฉลี่ยด้านความเป็นธรรมชาติสำหรับโมเดล TTS",
    loading: "กำลังโหลดข้อมูล...",
    load_failed: "ไม่สามารถโหลดตารางคะแนนได้",
    model: "Model",
    male: "ชาย",
    female: "หญิง",
    seen_thai: "ไทย (เคยเห็น)",
    unseen_thai: "ไทย (ไม่เคยเห็น)",
    unseen_english: "อังกฤษ (ไม่เคยเห็น)",
    unseen_thai_with_trans: "ไทย พร้อมแปล (ไม่เคยเห็น)",
    ratings: "จำนวนการให้คะแนนทั้งหมด:",
    footer: "ตารางคะแนนเฉลี่ยจากผู้ใช้สำหรับการเปรียบเทียบโมเดล TTS",
    notes: "หมายเหตุ:",
    note_lines: [
        "ฝึกฝนด้วย Tsync2 + Commonvoice",
        "ฝึกฝนด้วย Tsync2 + LJSpeech + Commonvoice + VCTK",
        "ฝึกฝนด้วย Tsync2 + LJSpeech + Commonvoice + VCTK + Thai Central",
    ],
};

impl TableText {
    pub fn for_language(language: Language) -> &'static TableText {
        match language {
            Language::En => &TABLE_EN,
            Language::Th => &TABLE_TH,
        }
    }

    /// Note text for a footnote marker (1-based).
    pub fn note(&self, marker: u8) -> Option<&'static str> {
        let idx = usize::from(marker).checked_sub(1)?;
        self.note_lines.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_note_lookup() {
        let text = TableText::for_language(Language::En);
        assert_eq!(text.note(1), Some("Trained on Tsync2 + Commonvoice"));
        assert_eq!(text.note(0), None);
        assert_eq!(text.note(4), None);
    }
}
