#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Part-of-speech tag as reported by the analysis service.
///
/// Tags the generator cares about get their own variant; everything else is
/// carried through verbatim so a dump of the parse still shows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PartOfSpeech {
    /// 名詞
    Noun,
    /// 助詞
    Particle,
    /// 動詞
    Verb,
    /// 形容詞
    Adjective,
    /// 助動詞
    AuxiliaryVerb,
    /// 特殊 (punctuation and symbols)
    Special,
    Other(String),
}

impl PartOfSpeech {
    pub const NOUN: &'static str = "名詞";
    pub const PARTICLE: &'static str = "助詞";
    pub const VERB: &'static str = "動詞";
    pub const ADJECTIVE: &'static str = "形容詞";
    pub const AUXILIARY_VERB: &'static str = "助動詞";
    pub const SPECIAL: &'static str = "特殊";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Noun => Self::NOUN,
            Self::Particle => Self::PARTICLE,
            Self::Verb => Self::VERB,
            Self::Adjective => Self::ADJECTIVE,
            Self::AuxiliaryVerb => Self::AUXILIARY_VERB,
            Self::Special => Self::SPECIAL,
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        match tag {
            Self::NOUN => Self::Noun,
            Self::PARTICLE => Self::Particle,
            Self::VERB => Self::Verb,
            Self::ADJECTIVE => Self::Adjective,
            Self::AUXILIARY_VERB => Self::AuxiliaryVerb,
            Self::SPECIAL => Self::Special,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
