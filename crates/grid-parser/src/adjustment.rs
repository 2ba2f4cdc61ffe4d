//! Coordinate adjustment commands: `$<axis><op><amount>`.
//!
//! An adjustment applies to every entry after it, in the order the commands
//! were given. `$x*5` followed by `$x+1` maps a raw `x` of 3 to 16.

use terrain_common::exact::{self, Integer};

use crate::error::{GridParseError, ParseResult};

/// Coordinate an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub axis: Axis,
    pub operation: Operation,
    pub amount: Integer,
}

impl Adjustment {
    /// Parse a command line, including its leading `$`.
    pub fn parse(command: &str, line: usize) -> ParseResult<Self> {
        let unknown = || GridParseError::UnknownCommand {
            line,
            command: command.to_string(),
        };

        let mut chars = command.strip_prefix('$').ok_or_else(unknown)?.chars();
        let axis = match chars.next() {
            Some('x') => Axis::X,
            Some('y') => Axis::Y,
            _ => return Err(unknown()),
        };
        let operation = match chars.next() {
            Some('+') => Operation::Add,
            Some('-') => Operation::Subtract,
            Some('*') => Operation::Multiply,
            _ => return Err(unknown()),
        };
        let amount = chars
            .as_str()
            .trim()
            .parse::<i64>()
            .map_err(|_| unknown())?;

        Ok(Self {
            axis,
            operation,
            amount: exact::integer(amount),
        })
    }

    pub fn apply(&self, value: Integer) -> Integer {
        match self.operation {
            Operation::Add => value + &self.amount,
            Operation::Subtract => value - &self.amount,
            Operation::Multiply => value * &self.amount,
        }
    }
}

/// Adjustments collected so far, per axis.
#[derive(Debug, Clone, Default)]
pub struct Adjustments {
    x: Vec<Adjustment>,
    y: Vec<Adjustment>,
}

impl Adjustments {
    pub fn push(&mut self, adjustment: Adjustment) {
        match adjustment.axis {
            Axis::X => self.x.push(adjustment),
            Axis::Y => self.y.push(adjustment),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len() + self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn apply(&self, axis: Axis, value: Integer) -> Integer {
        let adjustments = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        adjustments
            .iter()
            .fold(value, |value, adjustment| adjustment.apply(value))
    }
}
