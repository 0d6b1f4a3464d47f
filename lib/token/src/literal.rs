/// A scalar constant, either attached to a literal token or held by a literal node.
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::Display)]
pub enum LiteralValue {
    #[display(fmt = "nil")]
    Nil,
    Boolean(bool),
    Number(f64),
    Str(String),
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(LiteralValue::from(()), LiteralValue::Nil);
        assert_eq!(LiteralValue::from(true), LiteralValue::Boolean(true));
        assert_eq!(LiteralValue::from(1.5), LiteralValue::Number(1.5));
        assert_eq!(LiteralValue::from("text"), LiteralValue::Str("text".to_string()));
        assert_eq!(LiteralValue::from("text".to_string()), LiteralValue::Str("text".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(LiteralValue::Nil.to_string(), "nil");
        assert_eq!(LiteralValue::Boolean(false).to_string(), "false");
        assert_eq!(LiteralValue::Number(3.0).to_string(), "3");
        assert_eq!(LiteralValue::Number(1.5).to_string(), "1.5");
        assert_eq!(LiteralValue::Str("text".to_string()).to_string(), "text");
    }
}
