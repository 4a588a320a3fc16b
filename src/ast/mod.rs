/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the arithmetic grammar
///
/// Submodules:
/// - ast: The `Expr` tree and its constructors
pub mod ast;
