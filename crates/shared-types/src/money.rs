use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-rupee amount, displayed as `₹1,200` with Indian digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub u32);

impl Rupees {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Group digits as lakh/crore: last three, then pairs (`240000` → `2,40,000`).
fn group_indian(n: u32) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
