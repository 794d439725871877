/// The two actions offered after a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    In,
    Out,
}

impl Action {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" | "in" => Some(Self::In),
            "o" | "out" => Some(Self::Out),
            _ => None,
        }
    }
}
