//! Operator definitions for Pascal expressions.
//!
//! The `go_str` methods give the Go rendering the emitter uses; the
//! variant doc comments show the Pascal spellings.

/// Binary operators in Pascal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `=`
    Eq,
    /// `<>`
    NotEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (real division)
    FDiv,
    /// `div` (integer division)
    Div,
    /// `mod`
    Mod,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `shl`
    Shl,
    /// `shr`
    Shr,
    /// `in`
    In,
}

impl BinaryOp {
    /// The Go operator for the boolean/default reading of this operator.
    ///
    /// `and`/`or`/`xor` map to their logical forms here; the bitwise
    /// forms come from [`BinaryOp::bitwise_go_str`]. `in` never reaches
    /// the operator table (membership tests are rewritten wholesale).
    pub fn go_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::FDiv => "/",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Xor => "!=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::In => "in",
        }
    }

    /// The Go bitwise operator, for the operators that have one.
    pub fn bitwise_go_str(self) -> Option<&'static str> {
        match self {
            BinaryOp::And => Some("&"),
            BinaryOp::Or => Some("|"),
            BinaryOp::Xor => Some("^"),
            _ => None,
        }
    }

    /// Check if this operator is a comparison.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Less
                | BinaryOp::LessEq
                | BinaryOp::Greater
                | BinaryOp::GreaterEq
        )
    }

    /// Check if this operator yields an integral result.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::Mul
                | BinaryOp::Div
                | BinaryOp::Mod
                | BinaryOp::Shl
                | BinaryOp::Shr
        )
    }
}

/// Unary prefix operators in Pascal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-` negation
    Neg,
    /// `+` (unary)
    Plus,
    /// `not`
    Not,
}

impl UnaryOp {
    /// The Go rendering of this operator.
    pub fn go_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
        }
    }
}
