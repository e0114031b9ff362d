//! Differentiable scalar field expressions
//!
//! A small closed-form expression tree over two variables, used to describe
//! implicit boundaries `f(x, y) = 0` for the level-set projector. The tree
//! evaluates numerically and differentiates symbolically, so first and second
//! partials of any field come out as plain `FieldExpr` values that evaluate at
//! full speed with no finite-difference error.
//!
//! Construction goes through the smart constructors (or the `std::ops`
//! overloads built on them), which fold constants and drop identity terms so
//! derivative trees stay compact. Parsing textual expressions is out of
//! scope; callers compose trees directly:
//!
//! ```rust
//! use alice_distmesh::field::FieldExpr;
//!
//! // f(x, y) = x^2 + y^2 - 1, the unit circle
//! let f = FieldExpr::x().powi(2) + FieldExpr::y().powi(2) - 1.0;
//! assert_eq!(f.eval(2.0, 0.0), 3.0);
//!
//! // df/dx = 2x
//! let fx = f.diff(alice_distmesh::field::Var::X);
//! assert_eq!(fx.eval(2.0, 0.0), 4.0);
//! ```
//!
//! Author: Moroya Sakamoto

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two field variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Var {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
}

/// A closed-form scalar field of two variables.
///
/// Negative/zero/positive values carry the usual inside/boundary/outside
/// meaning when the tree is used as an implicit region description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldExpr {
    /// Constant value.
    Const(f64),
    /// The `x` variable.
    X,
    /// The `y` variable.
    Y,
    /// Sum of two subexpressions.
    Add(Box<FieldExpr>, Box<FieldExpr>),
    /// Difference of two subexpressions.
    Sub(Box<FieldExpr>, Box<FieldExpr>),
    /// Product of two subexpressions.
    Mul(Box<FieldExpr>, Box<FieldExpr>),
    /// Quotient of two subexpressions.
    Div(Box<FieldExpr>, Box<FieldExpr>),
    /// Negation.
    Neg(Box<FieldExpr>),
    /// Integer power of a subexpression.
    Pow(Box<FieldExpr>, i32),
    /// Sine.
    Sin(Box<FieldExpr>),
    /// Cosine.
    Cos(Box<FieldExpr>),
    /// Natural exponential.
    Exp(Box<FieldExpr>),
    /// Square root.
    Sqrt(Box<FieldExpr>),
}

// ── Constructors ─────────────────────────────────────────────

impl FieldExpr {
    /// The `x` variable.
    #[inline]
    pub fn x() -> Self {
        FieldExpr::X
    }

    /// The `y` variable.
    #[inline]
    pub fn y() -> Self {
        FieldExpr::Y
    }

    /// Constant expression.
    #[inline]
    pub fn constant(c: f64) -> Self {
        FieldExpr::Const(c)
    }

    /// Sum, folding constants and dropping zero terms.
    pub fn add(a: FieldExpr, b: FieldExpr) -> Self {
        match (a, b) {
            (FieldExpr::Const(x), FieldExpr::Const(y)) => FieldExpr::Const(x + y),
            (FieldExpr::Const(x), e) if x == 0.0 => e,
            (e, FieldExpr::Const(y)) if y == 0.0 => e,
            (a, b) => FieldExpr::Add(Box::new(a), Box::new(b)),
        }
    }

    /// Difference, folding constants and dropping zero terms.
    pub fn sub(a: FieldExpr, b: FieldExpr) -> Self {
        match (a, b) {
            (FieldExpr::Const(x), FieldExpr::Const(y)) => FieldExpr::Const(x - y),
            (e, FieldExpr::Const(y)) if y == 0.0 => e,
            (FieldExpr::Const(x), e) if x == 0.0 => FieldExpr::neg(e),
            (a, b) => FieldExpr::Sub(Box::new(a), Box::new(b)),
        }
    }

    /// Product, folding constants and absorbing zeros and ones.
    pub fn mul(a: FieldExpr, b: FieldExpr) -> Self {
        match (a, b) {
            (FieldExpr::Const(x), FieldExpr::Const(y)) => FieldExpr::Const(x * y),
            (FieldExpr::Const(x), _) | (_, FieldExpr::Const(x)) if x == 0.0 => {
                FieldExpr::Const(0.0)
            }
            (FieldExpr::Const(x), e) if x == 1.0 => e,
            (e, FieldExpr::Const(y)) if y == 1.0 => e,
            (a, b) => FieldExpr::Mul(Box::new(a), Box::new(b)),
        }
    }

    /// Quotient, folding constants and dropping unit denominators.
    pub fn div(a: FieldExpr, b: FieldExpr) -> Self {
        match (a, b) {
            (FieldExpr::Const(x), FieldExpr::Const(y)) => FieldExpr::Const(x / y),
            (FieldExpr::Const(x), _) if x == 0.0 => FieldExpr::Const(0.0),
            (e, FieldExpr::Const(y)) if y == 1.0 => e,
            (a, b) => FieldExpr::Div(Box::new(a), Box::new(b)),
        }
    }

    /// Negation, folding constants and double negations.
    pub fn neg(a: FieldExpr) -> Self {
        match a {
            FieldExpr::Const(x) => FieldExpr::Const(-x),
            FieldExpr::Neg(e) => *e,
            a => FieldExpr::Neg(Box::new(a)),
        }
    }

    /// Integer power, folding trivial exponents.
    pub fn powi(self, n: i32) -> Self {
        match (self, n) {
            (_, 0) => FieldExpr::Const(1.0),
            (e, 1) => e,
            (FieldExpr::Const(x), n) => FieldExpr::Const(x.powi(n)),
            (e, n) => FieldExpr::Pow(Box::new(e), n),
        }
    }

    /// Sine.
    pub fn sin(self) -> Self {
        match self {
            FieldExpr::Const(x) => FieldExpr::Const(x.sin()),
            e => FieldExpr::Sin(Box::new(e)),
        }
    }

    /// Cosine.
    pub fn cos(self) -> Self {
        match self {
            FieldExpr::Const(x) => FieldExpr::Const(x.cos()),
            e => FieldExpr::Cos(Box::new(e)),
        }
    }

    /// Natural exponential.
    pub fn exp(self) -> Self {
        match self {
            FieldExpr::Const(x) => FieldExpr::Const(x.exp()),
            e => FieldExpr::Exp(Box::new(e)),
        }
    }

    /// Square root.
    pub fn sqrt(self) -> Self {
        match self {
            FieldExpr::Const(x) => FieldExpr::Const(x.sqrt()),
            e => FieldExpr::Sqrt(Box::new(e)),
        }
    }
}

// ── Evaluation ───────────────────────────────────────────────

impl FieldExpr {
    /// Evaluate the field at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            FieldExpr::Const(c) => *c,
            FieldExpr::X => x,
            FieldExpr::Y => y,
            FieldExpr::Add(a, b) => a.eval(x, y) + b.eval(x, y),
            FieldExpr::Sub(a, b) => a.eval(x, y) - b.eval(x, y),
            FieldExpr::Mul(a, b) => a.eval(x, y) * b.eval(x, y),
            FieldExpr::Div(a, b) => a.eval(x, y) / b.eval(x, y),
            FieldExpr::Neg(a) => -a.eval(x, y),
            FieldExpr::Pow(a, n) => a.eval(x, y).powi(*n),
            FieldExpr::Sin(a) => a.eval(x, y).sin(),
            FieldExpr::Cos(a) => a.eval(x, y).cos(),
            FieldExpr::Exp(a) => a.eval(x, y).exp(),
            FieldExpr::Sqrt(a) => a.eval(x, y).sqrt(),
        }
    }

    /// Symbolic partial derivative with respect to `var`.
    pub fn diff(&self, var: Var) -> FieldExpr {
        match self {
            FieldExpr::Const(_) => FieldExpr::Const(0.0),
            FieldExpr::X => FieldExpr::Const(if var == Var::X { 1.0 } else { 0.0 }),
            FieldExpr::Y => FieldExpr::Const(if var == Var::Y { 1.0 } else { 0.0 }),
            FieldExpr::Add(a, b) => FieldExpr::add(a.diff(var), b.diff(var)),
            FieldExpr::Sub(a, b) => FieldExpr::sub(a.diff(var), b.diff(var)),
            FieldExpr::Mul(a, b) => {
                // Product rule: a'b + ab'
                FieldExpr::add(
                    FieldExpr::mul(a.diff(var), (**b).clone()),
                    FieldExpr::mul((**a).clone(), b.diff(var)),
                )
            }
            FieldExpr::Div(a, b) => {
                // Quotient rule: (a'b - ab') / b^2
                FieldExpr::div(
                    FieldExpr::sub(
                        FieldExpr::mul(a.diff(var), (**b).clone()),
                        FieldExpr::mul((**a).clone(), b.diff(var)),
                    ),
                    (**b).clone().powi(2),
                )
            }
            FieldExpr::Neg(a) => FieldExpr::neg(a.diff(var)),
            FieldExpr::Pow(a, n) => {
                // Chain rule: n * a^(n-1) * a'
                FieldExpr::mul(
                    FieldExpr::mul(FieldExpr::Const(*n as f64), (**a).clone().powi(n - 1)),
                    a.diff(var),
                )
            }
            FieldExpr::Sin(a) => FieldExpr::mul((**a).clone().cos(), a.diff(var)),
            FieldExpr::Cos(a) => {
                FieldExpr::neg(FieldExpr::mul((**a).clone().sin(), a.diff(var)))
            }
            FieldExpr::Exp(a) => FieldExpr::mul((**a).clone().exp(), a.diff(var)),
            FieldExpr::Sqrt(a) => {
                // a' / (2 sqrt(a))
                FieldExpr::div(
                    a.diff(var),
                    FieldExpr::mul(FieldExpr::Const(2.0), (**a).clone().sqrt()),
                )
            }
        }
    }

    /// Number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        match self {
            FieldExpr::Const(_) | FieldExpr::X | FieldExpr::Y => 1,
            FieldExpr::Add(a, b)
            | FieldExpr::Sub(a, b)
            | FieldExpr::Mul(a, b)
            | FieldExpr::Div(a, b) => 1 + a.node_count() + b.node_count(),
            FieldExpr::Neg(a)
            | FieldExpr::Pow(a, _)
            | FieldExpr::Sin(a)
            | FieldExpr::Cos(a)
            | FieldExpr::Exp(a)
            | FieldExpr::Sqrt(a) => 1 + a.node_count(),
        }
    }
}

// ── Operator overloads ───────────────────────────────────────

impl std::ops::Add for FieldExpr {
    type Output = FieldExpr;
    fn add(self, rhs: FieldExpr) -> FieldExpr {
        FieldExpr::add(self, rhs)
    }
}

impl std::ops::Add<f64> for FieldExpr {
    type Output = FieldExpr;
    fn add(self, rhs: f64) -> FieldExpr {
        FieldExpr::add(self, FieldExpr::Const(rhs))
    }
}

impl std::ops::Sub for FieldExpr {
    type Output = FieldExpr;
    fn sub(self, rhs: FieldExpr) -> FieldExpr {
        FieldExpr::sub(self, rhs)
    }
}

impl std::ops::Sub<f64> for FieldExpr {
    type Output = FieldExpr;
    fn sub(self, rhs: f64) -> FieldExpr {
        FieldExpr::sub(self, FieldExpr::Const(rhs))
    }
}

impl std::ops::Mul for FieldExpr {
    type Output = FieldExpr;
    fn mul(self, rhs: FieldExpr) -> FieldExpr {
        FieldExpr::mul(self, rhs)
    }
}

impl std::ops::Mul<f64> for FieldExpr {
    type Output = FieldExpr;
    fn mul(self, rhs: f64) -> FieldExpr {
        FieldExpr::mul(self, FieldExpr::Const(rhs))
    }
}

impl std::ops::Div for FieldExpr {
    type Output = FieldExpr;
    fn div(self, rhs: FieldExpr) -> FieldExpr {
        FieldExpr::div(self, rhs)
    }
}

impl std::ops::Div<f64> for FieldExpr {
    type Output = FieldExpr;
    fn div(self, rhs: f64) -> FieldExpr {
        FieldExpr::div(self, FieldExpr::Const(rhs))
    }
}

impl std::ops::Neg for FieldExpr {
    type Output = FieldExpr;
    fn neg(self) -> FieldExpr {
        FieldExpr::neg(self)
    }
}

impl From<f64> for FieldExpr {
    fn from(c: f64) -> FieldExpr {
        FieldExpr::Const(c)
    }
}

// ── Display ──────────────────────────────────────────────────

impl fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldExpr::Const(c) => write!(f, "{}", c),
            FieldExpr::X => write!(f, "x"),
            FieldExpr::Y => write!(f, "y"),
            FieldExpr::Add(a, b) => write!(f, "({} + {})", a, b),
            FieldExpr::Sub(a, b) => write!(f, "({} - {})", a, b),
            FieldExpr::Mul(a, b) => write!(f, "({} * {})", a, b),
            FieldExpr::Div(a, b) => write!(f, "({} / {})", a, b),
            FieldExpr::Neg(a) => write!(f, "(-{})", a),
            FieldExpr::Pow(a, n) => write!(f, "{}^{}", a, n),
            FieldExpr::Sin(a) => write!(f, "sin({})", a),
            FieldExpr::Cos(a) => write!(f, "cos({})", a),
            FieldExpr::Exp(a) => write!(f, "exp({})", a),
            FieldExpr::Sqrt(a) => write!(f, "sqrt({})", a),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_circle() -> FieldExpr {
        FieldExpr::x().powi(2) + FieldExpr::y().powi(2) - 1.0
    }

    #[test]
    fn eval_basics() {
        let f = unit_circle();
        assert_eq!(f.eval(0.0, 0.0), -1.0);
        assert_eq!(f.eval(1.0, 0.0), 0.0);
        assert_eq!(f.eval(2.0, 0.0), 3.0);
    }

    #[test]
    fn first_derivatives() {
        let f = unit_circle();
        let fx = f.diff(Var::X);
        let fy = f.diff(Var::Y);
        assert_eq!(fx.eval(3.0, 5.0), 6.0);
        assert_eq!(fy.eval(3.0, 5.0), 10.0);
    }

    #[test]
    fn second_derivatives() {
        let f = unit_circle();
        let fxx = f.diff(Var::X).diff(Var::X);
        let fxy = f.diff(Var::X).diff(Var::Y);
        assert_eq!(fxx.eval(7.0, -2.0), 2.0);
        assert_eq!(fxy.eval(7.0, -2.0), 0.0);
    }

    #[test]
    fn product_rule() {
        // f = x * y, fx = y, fy = x, fxy = 1
        let f = FieldExpr::x() * FieldExpr::y();
        assert_eq!(f.diff(Var::X).eval(2.0, 3.0), 3.0);
        assert_eq!(f.diff(Var::Y).eval(2.0, 3.0), 2.0);
        assert_eq!(f.diff(Var::X).diff(Var::Y).eval(2.0, 3.0), 1.0);
    }

    #[test]
    fn quotient_rule() {
        // f = x / y, fx = 1/y, fy = -x/y^2
        let f = FieldExpr::x() / FieldExpr::y();
        assert!((f.diff(Var::X).eval(1.0, 2.0) - 0.5).abs() < 1e-15);
        assert!((f.diff(Var::Y).eval(1.0, 2.0) + 0.25).abs() < 1e-15);
    }

    #[test]
    fn trig_chain_rule() {
        // f = sin(x^2), fx = 2x cos(x^2)
        let f = FieldExpr::x().powi(2).sin();
        let fx = f.diff(Var::X);
        let x: f64 = 0.7;
        let expected = 2.0 * x * (x * x).cos();
        assert!((fx.eval(x, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn exp_sqrt_derivatives() {
        // f = exp(sqrt(x)), fx = exp(sqrt(x)) / (2 sqrt(x))
        let f = FieldExpr::x().sqrt().exp();
        let fx = f.diff(Var::X);
        let x: f64 = 2.5;
        let expected = x.sqrt().exp() / (2.0 * x.sqrt());
        assert!((fx.eval(x, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn constant_folding_keeps_trees_small() {
        let f = unit_circle();
        // fx = 2x after folding: Mul(Const 2, X) = 3 nodes
        let fx = f.diff(Var::X);
        assert!(fx.node_count() <= 3, "fx = {} ({} nodes)", fx, fx.node_count());
        // fxx = 2: a single constant
        let fxx = fx.diff(Var::X);
        assert_eq!(fxx, FieldExpr::Const(2.0));
    }

    #[test]
    fn derivative_of_constant_field_is_zero() {
        let f = FieldExpr::constant(42.0);
        assert_eq!(f.diff(Var::X), FieldExpr::Const(0.0));
        assert_eq!(f.diff(Var::Y), FieldExpr::Const(0.0));
    }

    #[test]
    fn display_roundtrip_is_readable() {
        let f = unit_circle();
        let s = format!("{}", f);
        assert!(s.contains("x^2"));
        assert!(s.contains("y^2"));
    }

    #[test]
    fn serde_roundtrip() {
        let f = unit_circle();
        let json = serde_json::to_string(&f).unwrap();
        let back: FieldExpr = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
