use std::fmt::Display;

/// Expression
///
/// The syntax tree produced by the arithmetic grammar. Every node owns its
/// children, so a tree is built strictly bottom-up while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Variable(String),
    /// A binary operator token waiting to be folded into a `BinOp`.
    Operator(char),
    Assignment {
        variable: String,
        expr: Box<Expr>,
    },
    /// `op` is always an `Operator`, see [`Expr::bin_op`].
    BinOp {
        op: Box<Expr>,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn assignment(variable: impl Into<String>, expr: Expr) -> Self {
        Expr::Assignment {
            variable: variable.into(),
            expr: Box::new(expr),
        }
    }

    pub fn bin_op(op: char, left: Expr, right: Expr) -> Self {
        Expr::BinOp {
            op: Box::new(Expr::Operator(op)),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Operator(op) => write!(f, "{}", op),
            Expr::Assignment { variable, expr } => write!(f, "{} = {}", variable, expr),
            Expr::BinOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
