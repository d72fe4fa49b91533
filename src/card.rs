//! Card value, color, and card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseColorError, ValueError};

/// A card value in the range `0..=9`.
///
/// A `Value` always holds a legal value; construction checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(u8);

impl Value {
    /// Smallest legal value.
    pub const MIN: u8 = 0;
    /// Largest legal value.
    pub const MAX: u8 = 9;
    /// Number of distinct values.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Creates a value, checking the range.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is above [`Value::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use trico::Value;
    ///
    /// assert_eq!(Value::new(9).unwrap().get(), 9);
    /// assert!(Value::new(10).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterates every legal value in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<i64> for Value {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(raw) if raw <= Self::MAX => Ok(Self(raw)),
            _ => Err(ValueError { value }),
        }
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> Self {
        value.0
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Color {
    /// All colors, in declaration order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];
    /// Number of distinct colors.
    pub const COUNT: usize = Self::ALL.len();

    /// Looks a color up by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the name if it matches no color.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::Color;
    ///
    /// assert_eq!(Color::from_name("RED").unwrap(), Color::Red);
    /// assert!(Color::from_name("yellow").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ParseColorError> {
        for color in Self::ALL {
            if name.eq_ignore_ascii_case(color.name()) {
                return Ok(color);
            }
        }
        Err(ParseColorError { name: name.into() })
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The color of the card.
    pub color: Color,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: Value, color: Color) -> Self {
        Self { value, color }
    }

    /// Builds a card from raw parts: an integer value and a color name.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or the color name is
    /// unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::{Card, Color};
    ///
    /// let card = Card::of(7, "red").unwrap();
    /// assert_eq!(card.value.get(), 7);
    /// assert_eq!(card.color, Color::Red);
    /// ```
    pub fn of(value: u8, color: &str) -> Result<Self, CardError> {
        Ok(Self {
            value: Value::new(value)?,
            color: Color::from_name(color)?,
        })
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Value::COUNT * Color::COUNT;
