use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    Left,
    Right,
}
impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Operator {
    pub sym: &'static str,
    pub prec: u8,
    pub assoc: Assoc,
    pub eval: fn(f64, f64) -> f64,
}
impl Operator {
    /// The pop condition of the precedence loop: a pending `self` resolves
    /// before an incoming `op` when it binds tighter, or equally tight with
    /// `op` grouping left to right.
    pub fn has_bigger_prec(&self, op: &Operator) -> bool {
        self.prec > op.prec || (self.prec == op.prec && op.is_left_assoc())
    }

    pub fn is_left_assoc(&self) -> bool {
        self.assoc.is_left()
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        (self.eval)(lhs, rhs)
    }
}

pub fn binary(sym: &str) -> Option<&'static Operator> {
    BINARY_OPERATOR_TABLE.get(sym)
}

pub fn function(name: &str) -> Option<fn(f64) -> f64> {
    FUNCTION_TABLE.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn is_operator(sym: &str) -> bool {
    BINARY_OPERATOR_TABLE.contains_key(sym)
}

pub fn is_function(name: &str) -> bool {
    function(name).is_some()
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}
fn sub(a: f64, b: f64) -> f64 {
    a - b
}
fn mul(a: f64, b: f64) -> f64 {
    a * b
}
fn div(a: f64, b: f64) -> f64 {
    a / b
}
fn pow(a: f64, b: f64) -> f64 {
    a.powf(b)
}

fn neg(x: f64) -> f64 {
    -x
}
fn sin(x: f64) -> f64 {
    x.sin()
}
fn cos(x: f64) -> f64 {
    x.cos()
}
fn tan(x: f64) -> f64 {
    x.tan()
}

pub static BINARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        sym: "+",
        prec: 10,
        assoc: Assoc::Left,
        eval: add,
    },
    "-" => Operator {
        sym: "-",
        prec: 10,
        assoc: Assoc::Left,
        eval: sub,
    },
    "*" => Operator {
        sym: "*",
        prec: 20,
        assoc: Assoc::Left,
        eval: mul,
    },
    "/" => Operator {
        sym: "/",
        prec: 20,
        assoc: Assoc::Left,
        eval: div,
    },
    "^" => Operator {
        sym: "^",
        prec: 30,
        assoc: Assoc::Right,
        eval: pow,
    },
};

pub static FUNCTION_TABLE: phf::Map<&'static str, fn(f64) -> f64> = phf_map! {
    "neg" => neg,
    "sin" => sin,
    "cos" => cos,
    "tan" => tan,
};

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn precedence_and_associativity() {
        let add = binary("+").unwrap();
        let sub = binary("-").unwrap();
        let mul = binary("*").unwrap();
        let pow = binary("^").unwrap();

        assert!(mul.has_bigger_prec(add));
        assert!(!add.has_bigger_prec(mul));
        // equal precedence resolves left to right for left associative ops
        assert!(add.has_bigger_prec(sub));
        // but not for the right associative `^`
        assert!(!pow.has_bigger_prec(pow));
    }

    #[test]
    fn lookups() {
        assert!(is_operator("^"));
        assert!(!is_operator("%"));
        assert!(is_function("sin"));
        assert!(is_function("SIN"));
        assert!(!is_function("log"));
    }

    #[test]
    fn evaluation_rules() {
        assert_eq!(binary("^").unwrap().apply(2.0, 10.0), 1024.0);
        assert_eq!(binary("-").unwrap().apply(5.0, 3.0), 2.0);
        assert_eq!(function("neg").unwrap()(5.0), -5.0);
        assert_eq!(function("cos").unwrap()(0.0), 1.0);
    }
}
