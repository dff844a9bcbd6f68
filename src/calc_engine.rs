use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    InvalidOperator(char),
    DivisionByZero,
    UnknownOperator(char),
    InvalidModeSelection(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidOperator(_) => write!(f, "Invalid operator"),
            CalcError::DivisionByZero => write!(f, "Division by zero"),
            CalcError::UnknownOperator(_) => write!(f, "Unknown operator"),
            CalcError::InvalidModeSelection(_) => write!(f, "Invalid choice"),
        }
    }
}

impl std::error::Error for CalcError {}

pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Six significant digits, trailing zeros dropped, exponent form outside
/// `1e-4 ..= 1e6`: `0.3`, `0.333333`, `1e+300`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return value.to_string();
    }

    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// A single binary operation: two operands and one of `+ - * /`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    operand1: f64,
    operand2: f64,
    op: char,
}

impl Default for Expression {
    fn default() -> Self {
        Expression {
            operand1: 0.0,
            operand2: 0.0,
            op: '+',
        }
    }
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(operand1: f64, symbol: char, operand2: f64) -> Result<Self, CalcError> {
        let mut expr = Expression::new();
        expr.set_operand1(operand1);
        expr.set_operand2(operand2);
        expr.set_operator(symbol)?;
        Ok(expr)
    }

    pub fn set_operand1(&mut self, value: f64) {
        self.operand1 = value;
    }

    pub fn set_operand2(&mut self, value: f64) {
        self.operand2 = value;
    }

    /// Leaves the current operator untouched when `symbol` is rejected.
    pub fn set_operator(&mut self, symbol: char) -> Result<(), CalcError> {
        if !OPERATORS.contains(&symbol) {
            return Err(CalcError::InvalidOperator(symbol));
        }
        self.op = symbol;
        Ok(())
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    pub fn operator(&self) -> char {
        self.op
    }

    pub fn evaluate(&self) -> Result<f64, CalcError> {
        let (a, b) = (self.operand1, self.operand2);
        match self.op {
            '+' => Ok(a + b),
            '-' => Ok(a - b),
            '*' => Ok(a * b),
            '/' => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            other => Err(CalcError::UnknownOperator(other)),
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_number(self.operand1),
            self.op,
            format_number(self.operand2)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_each_operator() {
        let cases = [
            (6.0, '+', 3.0, 9.0),
            (6.0, '-', 3.0, 3.0),
            (6.0, '*', 3.0, 18.0),
            (6.0, '/', 3.0, 2.0),
            (-1.5, '+', 0.25, -1.25),
            (2.5, '*', -4.0, -10.0),
        ];
        for (a, op, b, want) in cases {
            let expr = Expression::build(a, op, b).unwrap();
            assert_eq!(expr.evaluate().unwrap(), want, "{}", expr);
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        for c in ['^', '%', 'x', 'q', ' ', '0'] {
            assert_eq!(
                Expression::build(1.0, c, 2.0),
                Err(CalcError::InvalidOperator(c))
            );
        }
    }

    #[test]
    fn failed_set_operator_keeps_previous() {
        let mut expr = Expression::build(4.0, '*', 2.0).unwrap();
        assert!(expr.set_operator('%').is_err());
        assert_eq!(expr.operator(), '*');
        assert_eq!(expr.evaluate().unwrap(), 8.0);
    }

    #[test]
    fn division_by_zero_only_for_division() {
        for a in [0.0, 5.0, -3.25] {
            let expr = Expression::build(a, '/', 0.0).unwrap();
            assert_eq!(expr.evaluate(), Err(CalcError::DivisionByZero));
            assert_eq!(expr.evaluate().unwrap_err().to_string(), "Division by zero");
        }
        for op in ['+', '-', '*'] {
            assert!(Expression::build(5.0, op, 0.0).unwrap().evaluate().is_ok());
        }
        // negative zero compares equal to zero
        assert!(Expression::build(1.0, '/', -0.0).unwrap().evaluate().is_err());
    }

    #[test]
    fn unknown_operator_is_caught() {
        let expr = Expression {
            operand1: 2.0,
            operand2: 3.0,
            op: '^',
        };
        assert_eq!(expr.evaluate(), Err(CalcError::UnknownOperator('^')));
        assert_eq!(expr.evaluate().unwrap_err().to_string(), "Unknown operator");
    }

    #[test]
    fn describe_uses_plain_numbers() {
        assert_eq!(Expression::build(3.0, '+', 4.0).unwrap().describe(), "3 + 4");
        assert_eq!(Expression::build(1.5, '/', -2.0).unwrap().describe(), "1.5 / -2");
        assert_eq!(Expression::new().describe(), "0 + 0");
    }

    #[test]
    fn numbers_use_six_significant_digits() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(123456.0), "123456");
        assert_eq!(format_number(1234567.0), "1.23457e+06");
        assert_eq!(format_number(999999.7), "1e+06");
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(0.00001234), "1.234e-05");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(
            Expression::build(1e300, '*', 1.0).unwrap().describe(),
            "1e+300 * 1"
        );
    }

    #[test]
    fn getters() {
        let expr = Expression::build(7.0, '-', 2.0).unwrap();
        assert_eq!(expr.operand1(), 7.0);
        assert_eq!(expr.operand2(), 2.0);
        assert_eq!(expr.operator(), '-');
    }
}
