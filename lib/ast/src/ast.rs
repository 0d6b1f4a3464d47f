mod expr;
pub use expr::{Binary, Expr, Grouping, Literal, Unary};

mod visitor;
pub use visitor::Visitor;

mod printer;
pub use printer::{AstPrinter, RpnPrinter};

mod depth;
pub use depth::{Error, DEFAULT_MAX_DEPTH};

pub use token::{LiteralValue, Token, TokenType};
