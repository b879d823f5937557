//! Built-in German reference data, used when the data directory does not
//! provide its own files.

/// Verb particles that split off in main clauses ("Ich rufe dich an")
pub const SEPARABLE_PREFIXES: &[&str] = &[
    "ab", "an", "auf", "aus", "bei", "dar", "ein", "empor", "fest", "fort", "her", "heraus",
    "herein", "herum", "hin", "hinaus", "hinein", "los", "mit", "nach", "nieder", "vor",
    "voran", "vorbei", "weg", "weiter", "zu", "zurück", "zusammen",
];

/// `(pattern, replacement, last_resort)`
pub const VARIANT_PATTERNS: &[(&str, &str, bool)] = &[
    // participles
    ("^ge(.+)t$", "$1en", false),
    ("^ge(.+)en$", "$1en", false),
    // present and past tense
    ("e$", "en", false),
    ("st$", "en", false),
    ("est$", "en", false),
    ("et$", "en", false),
    ("te$", "en", false),
    ("ten$", "en", false),
    ("test$", "en", false),
    ("tet$", "en", false),
    // adjective and noun endings
    ("e$", "", false),
    ("en$", "", false),
    ("er$", "", false),
    ("es$", "", false),
    ("em$", "", false),
    ("nen$", "", false),
    ("t$", "en", true),
    ("n$", "", true),
    ("s$", "", true),
];

/// `(canonical, variant)` for irregular forms
pub const EXPLICIT_VARIANTS: &[(&str, &str)] = &[
    ("sein", "bin"),
    ("sein", "bist"),
    ("sein", "ist"),
    ("sein", "sind"),
    ("sein", "seid"),
    ("sein", "war"),
    ("sein", "warst"),
    ("sein", "waren"),
    ("sein", "gewesen"),
    ("haben", "hat"),
    ("haben", "hast"),
    ("haben", "hatte"),
    ("haben", "hatten"),
    ("werden", "wird"),
    ("werden", "wirst"),
    ("werden", "wurde"),
    ("werden", "wurden"),
    ("gehen", "ging"),
    ("gehen", "gingen"),
    ("gehen", "gegangen"),
    ("kommen", "kam"),
    ("kommen", "kamen"),
    ("sehen", "sah"),
    ("sehen", "sieht"),
    ("geben", "gab"),
    ("geben", "gibt"),
    ("nehmen", "nahm"),
    ("nehmen", "nimmt"),
    ("rennen", "rannte"),
    ("denken", "dachte"),
    ("bringen", "brachte"),
    ("wissen", "weiß"),
    ("wissen", "wusste"),
    ("können", "kann"),
    ("können", "konnte"),
    ("müssen", "muss"),
    ("müssen", "musste"),
    ("wollen", "will"),
    ("mögen", "mag"),
    ("mögen", "möchte"),
    ("dürfen", "darf"),
];
