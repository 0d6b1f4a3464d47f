use crate::Expr;

/// Nesting depth up to which recursive visitors can safely be run on a
/// default-sized thread stack, e.g. 1,000 groupings around a literal.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Expression nesting depth {depth} exceeds limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}

// None of these recurse, so they work on trees too deep to visit.
impl Expr {
    /// Number of nesting levels below this node, i.e. edges on the longest
    /// path down to a leaf. A lone literal has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((expr, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(expr.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            pending.extend(expr.children());
        }
        count
    }

    /// Returns the depth of this tree, or an error if it is deeper than `limit`.
    ///
    /// Meant to be called before handing a tree to a visitor that recurses
    /// through `accept`.
    pub fn check_depth(&self, limit: usize) -> Result<usize, Error> {
        let depth = self.depth();
        if depth > limit {
            log::debug!("Rejecting expression of depth {depth}, limit is {limit}");
            return Err(Error::TooDeep { depth, limit });
        }
        Ok(depth)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use token::{Token, TokenType};

    use super::*;

    fn plus() -> Token {
        Token::new(TokenType::Plus, "+", None, 1)
    }

    fn nested_groupings(n: usize) -> Expr {
        let mut expr = Expr::literal(1.0);
        for _ in 0..n {
            expr = Expr::grouping(expr);
        }
        expr
    }

    #[test]
    fn leaf() {
        let expr = Expr::literal(1.0);
        assert_eq!(expr.depth(), 0);
        assert_eq!(expr.node_count(), 1);
    }

    #[test]
    fn unbalanced_binary() {
        // (1 + (2 + (3 + 4)))
        let expr = Expr::binary(
            Expr::literal(1.0),
            plus(),
            Expr::binary(
                Expr::literal(2.0),
                plus(),
                Expr::binary(Expr::literal(3.0), plus(), Expr::literal(4.0)),
            ),
        );
        assert_eq!(expr.depth(), 3);
        assert_eq!(expr.node_count(), 7);
    }

    #[test]
    fn check_depth_limit() {
        let expr = nested_groupings(DEFAULT_MAX_DEPTH);
        assert_eq!(expr.check_depth(DEFAULT_MAX_DEPTH), Ok(DEFAULT_MAX_DEPTH));

        let expr = nested_groupings(DEFAULT_MAX_DEPTH + 1);
        assert_eq!(
            expr.check_depth(DEFAULT_MAX_DEPTH),
            Err(Error::TooDeep { depth: DEFAULT_MAX_DEPTH + 1, limit: DEFAULT_MAX_DEPTH })
        );
    }

    #[test]
    fn very_deep_tree() {
        let expr = nested_groupings(100_000);
        assert_eq!(expr.depth(), 100_000);
        assert_eq!(expr.node_count(), 100_001);
        assert!(expr.check_depth(DEFAULT_MAX_DEPTH).is_err());
    }

    #[test]
    fn error_message() {
        let error = Error::TooDeep { depth: 12, limit: 10 };
        assert_eq!(error.to_string(), "Expression nesting depth 12 exceeds limit of 10");
    }
}
