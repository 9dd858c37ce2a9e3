//! Pure keypad state machine backing the calculator window.
//!
//! Classic accumulator semantics: an operator press folds the pending
//! operation into the accumulator, so chained input like `2 + 3 + 4 =`
//! displays intermediate results along the way. Division by zero normalizes
//! to zero instead of poisoning the display.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Binary operators on the keypad.
pub enum Operator {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`, normalizing division by zero to zero.
    Divide,
}

impl Operator {
    /// Keypad label for the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The calculator's complete state.
pub struct CalcEngine {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    waiting_for_operand: bool,
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl CalcEngine {
    /// Current display contents.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Appends a digit or the decimal point to the operand being entered.
    pub fn push_digit(&mut self, digit: char) {
        if digit == '.' && !self.waiting_for_operand && self.display.contains('.') {
            return;
        }
        if self.waiting_for_operand {
            self.display = seed_display(digit);
            self.waiting_for_operand = false;
        } else if self.display == "0" && digit != '.' {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Registers a binary operator, folding any pending operation first.
    pub fn input_operator(&mut self, operator: Operator) {
        let value = self.current_value();
        match (self.accumulator, self.pending) {
            (Some(accumulator), Some(pending)) => {
                let result = pending.apply(accumulator, value);
                self.display = format_value(result);
                self.accumulator = Some(result);
            }
            _ => self.accumulator = Some(value),
        }
        self.waiting_for_operand = true;
        self.pending = Some(operator);
    }

    /// Evaluates the pending operation, if any.
    pub fn evaluate(&mut self) {
        if let (Some(accumulator), Some(pending)) = (self.accumulator, self.pending) {
            let result = pending.apply(accumulator, self.current_value());
            self.display = format_value(result);
            self.accumulator = None;
            self.pending = None;
            self.waiting_for_operand = true;
        }
    }

    /// Resets everything to the power-on state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

fn seed_display(digit: char) -> String {
    if digit == '.' {
        "0.".to_string()
    } else {
        digit.to_string()
    }
}

fn format_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn type_digits(engine: &mut CalcEngine, digits: &str) {
        for digit in digits.chars() {
            engine.push_digit(digit);
        }
    }

    #[test]
    fn digits_accumulate_and_leading_zero_is_replaced() {
        let mut engine = CalcEngine::default();
        assert_eq!(engine.display(), "0");

        type_digits(&mut engine, "12");
        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn decimal_entry_is_single_dotted() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "3.14");
        assert_eq!(engine.display(), "3.14");

        engine.push_digit('.');
        assert_eq!(engine.display(), "3.14");
    }

    #[test]
    fn decimal_first_seeds_a_leading_zero() {
        let mut engine = CalcEngine::default();
        engine.push_digit('.');
        type_digits(&mut engine, "5");
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn simple_addition_evaluates() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "7");
        engine.input_operator(Operator::Add);
        type_digits(&mut engine, "35");
        engine.evaluate();
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn chained_operators_fold_into_the_accumulator() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "2");
        engine.input_operator(Operator::Add);
        type_digits(&mut engine, "3");
        engine.input_operator(Operator::Add);
        assert_eq!(engine.display(), "5");

        type_digits(&mut engine, "4");
        engine.evaluate();
        assert_eq!(engine.display(), "9");
    }

    #[test]
    fn division_by_zero_normalizes_to_zero() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "8");
        engine.input_operator(Operator::Divide);
        type_digits(&mut engine, "0");
        engine.evaluate();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn typing_after_evaluate_starts_a_fresh_operand() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "2");
        engine.input_operator(Operator::Add);
        type_digits(&mut engine, "3");
        engine.evaluate();
        assert_eq!(engine.display(), "5");

        type_digits(&mut engine, "9");
        assert_eq!(engine.display(), "9");
    }

    #[test]
    fn fractional_results_keep_their_precision() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "1");
        engine.input_operator(Operator::Divide);
        type_digits(&mut engine, "2");
        engine.evaluate();
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn clear_resets_to_power_on_state() {
        let mut engine = CalcEngine::default();
        type_digits(&mut engine, "123");
        engine.input_operator(Operator::Multiply);
        engine.clear();
        assert_eq!(engine, CalcEngine::default());
    }
}
