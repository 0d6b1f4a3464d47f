use crate::{Binary, Grouping, Literal, Unary};

/// An operation over expression trees, one method per node variant.
///
/// [`Expr::accept`](crate::Expr::accept) picks the method matching the node it
/// is called on. None of the methods have default bodies, so an implementation
/// that forgets a variant does not compile.
///
/// Nothing recurses on its own: an implementation that needs the result of a
/// child calls `child.accept(self)` where it wants it, which leaves the
/// traversal order (or skipping children entirely) up to the visitor.
///
/// ```
/// use ast::{Binary, Expr, Grouping, Literal, Unary, Visitor};
///
/// struct LiteralCount;
///
/// impl Visitor<usize> for LiteralCount {
///     fn visit_binary(&mut self, binary: &Binary) -> usize {
///         binary.left().accept(self) + binary.right().accept(self)
///     }
///
///     fn visit_grouping(&mut self, grouping: &Grouping) -> usize {
///         grouping.expression().accept(self)
///     }
///
///     fn visit_literal(&mut self, _: &Literal) -> usize {
///         1
///     }
///
///     fn visit_unary(&mut self, unary: &Unary) -> usize {
///         unary.right().accept(self)
///     }
/// }
///
/// assert_eq!(Expr::grouping(Expr::literal(1.0)).accept(&mut LiteralCount), 1);
/// ```
///
/// Leaving out a method is rejected:
///
/// ```compile_fail,E0046
/// use ast::{Binary, Grouping, Literal, Visitor};
///
/// struct Incomplete;
///
/// impl Visitor<()> for Incomplete {
///     fn visit_binary(&mut self, _: &Binary) {}
///     fn visit_grouping(&mut self, _: &Grouping) {}
///     fn visit_literal(&mut self, _: &Literal) {}
/// }
/// ```
pub trait Visitor<T> {
    fn visit_binary(&mut self, binary: &Binary) -> T;
    fn visit_grouping(&mut self, grouping: &Grouping) -> T;
    fn visit_literal(&mut self, literal: &Literal) -> T;
    fn visit_unary(&mut self, unary: &Unary) -> T;
}
