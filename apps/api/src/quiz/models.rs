use std::fmt;

/// One of the four fixed option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLabel::A),
            'B' => Some(OptionLabel::B),
            'C' => Some(OptionLabel::C),
            'D' => Some(OptionLabel::D),
            _ => None,
        }
    }

    /// Parses a whole answer value. Only a bare `A`..`D` is accepted.
    pub fn parse(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four option texts of a question, keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options([String; 4]);

impl Options {
    #[cfg(test)]
    pub fn new(a: &str, b: &str, c: &str, d: &str) -> Self {
        Options([a.to_string(), b.to_string(), c.to_string(), d.to_string()])
    }

    pub fn get(&self, label: OptionLabel) -> &str {
        &self.0[label.index()]
    }

    pub fn set(&mut self, label: OptionLabel, text: String) {
        self.0[label.index()] = text;
    }

    /// Labels whose slot is still empty, in label order.
    pub fn missing(&self) -> Vec<OptionLabel> {
        OptionLabel::ALL
            .into_iter()
            .filter(|l| self.get(*l).is_empty())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL.into_iter().map(move |l| (l, self.get(l)))
    }
}

/// A fully-formed quiz item. Only the parser builds these, and only from
/// blocks that passed the completeness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Options,
    pub correct: OptionLabel,
}
