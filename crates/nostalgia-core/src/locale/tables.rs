//! Static phrase tables, indexed by `Phrase`.

pub(crate) const EN_US: &[&str] = &[
    "by",
    "nostalgiaTok",
    "FM Da$ani",
    "what's your name?",
    "next",
    "Your",
    "nostalgia",
    "what time period are you nostalgic for?",
    "what creators (if any) (use commas)?",
    "what topics (if any) (use commas)?",
    "'s ",
    "",
    "",
    "if you wanna save your nostalgia for later, name it here",
    "or not, thats ok",
    "video pool",
    "a whole lot of 'em",
    "player",
    "ts plays videos",
    "loading...",
    "",
    "choose this one&nbsp;-&nbsp;",
    "delete this one&nbsp;",
    "view saved nostalgias",
    "next one&nbsp;-&nbsp;",
    "less of ts",
    "➢",
    "more of ts",
    "creator",
    "topic",
    "drag ts down",
    "exit ts menu",
    "what's good, ",
    "anqrzfeubxkmlpwhdvocty",
    "abcd_efghijklmn_opqrstuvwxyz_",
    "0,2,3,4,5,7,8,10,11,12,13,14,15,16,17,18,19,21",
    "nvm",
];

pub(crate) const EN: &[&str] = &[
    "by",
    "nostalgiaTok",
    "FM Da$ani",
    "what's your name?",
    "(next)",
    "Your",
    "nostalgia",
    "what time period are you nostalgic for?",
    "what creators (if any) (use commas)?",
    "what topics (if any) (use commas)?",
    "'s ",
    "",
    "",
];

pub(crate) const FR: &[&str] = &[
    "par",
    "nostalgiaTok",
    "FM Da$ani",
    "Comment tu t'appelles ?",
    "(suivant)",
    "Ton",
    "nostalgie",
    "Pour quelle période ressens-tu de la nostalgie ?",
    "Quels créateurs (le cas échéant) (sépare par des virgules) ?",
    "Quels sujets (le cas échéant) (sépare par des virgules) ?",
    "de ",
    "",
    "",
];

pub(crate) const ES: &[&str] = &[
    "por",
    "nostalgiaTok",
    "FM Da$ani",
    "¿Cómo te llamas?",
    "(siguiente)",
    "Tu",
    "",
    "¿De qué época sientes nostalgia?",
    "¿Qué creadores (si los hay) (usa comas)?",
    "¿Qué temas (si los hay) (usa comas)?",
    "",
    "nostalgia",
    " de ",
];

pub(crate) const JA: &[&str] = &[
    "〜によって",
    "nostalgiaTok",
    "FM Da$ani",
    "あなたの名前は何ですか？",
    "(次)",
    "あなたの",
    "",
    "どの時代にノスタルジーを感じますか？",
    "どのクリエイター（いる場合）（カンマで区切って）？",
    "どのトピック（ある場合）（カンマで区切って）？",
    "",
    "ノスタルジア",
    " の ",
];

pub(crate) const AR: &[&str] = &[
    "من",
    "FM Da$ani",
    "nostalgiaTok",
    "ما اسمك؟",
    "(التالي)",
    "لك",
    "",
    "ما الفترة الزمنية التي تشعر بالحنين إليها؟",
    "ما المبدعين (إن وجد) (استخدم الفواصل)؟",
    "ما المواضيع (إن وجد) (استخدم الفواصل)؟",
    "",
    "الحنين",
    " لـ ",
];

pub(crate) const HE: &[&str] = &[
    "מִן",
    "FM Da$ani",
    "nostalgiaTok",
    "מה השם שלך?",
    "(בא)",
    "שלך",
    "",
    "לאיזו תקופה אתה מתגעגע?",
    "אילו יוצרים (אם בכלל) (השתמש בפסיקים)?",
    "אילו נושאים (אם בכלל) (השתמש בפסיקים)?",
    "",
    "נוסטלגיה",
    " של ",
];

/// Known tables by exact tag.
pub(crate) fn table_for(tag: &str) -> Option<&'static [&'static str]> {
    match tag {
        "en-US" => Some(EN_US),
        "en" => Some(EN),
        "fr" => Some(FR),
        "es" => Some(ES),
        "ja" => Some(JA),
        "ar" => Some(AR),
        "he" => Some(HE),
        _ => None,
    }
}
