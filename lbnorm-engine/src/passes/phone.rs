//! Telephone numbers
//!
//! Pre: raw text. Post: on lines carrying a telephone label, every run of
//! two or more digits is read digit by digit ("null" is never dropped).

use super::PassContext;
use crate::error::Result;
use crate::pass::{compile, or_keep, replace_matches, PassId, RewritePass};
use lbnorm_core::Numerals;
use regex::Regex;
use std::borrow::Cow;

pub(crate) struct PhonePass {
    numerals: Numerals,
    labels: Vec<String>,
    digits: Regex,
}

impl PhonePass {
    pub(crate) fn new(ctx: &PassContext) -> Result<Self> {
        Ok(Self {
            numerals: ctx.numerals.clone(),
            labels: ctx.rules.phone_labels.clone(),
            digits: compile("[0-9]{2,}")?,
        })
    }

    fn is_phone_line(&self, line: &str) -> bool {
        self.labels.iter().any(|label| line.contains(label.as_str()))
    }

    fn read_digits(&self, digits: &str) -> Option<String> {
        let words = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| self.numerals.to_cardinal(d))
            .collect::<lbnorm_core::Result<Vec<_>>>()
            .map(|words| words.join(" "));
        or_keep(words, digits)
    }
}

impl RewritePass for PhonePass {
    fn id(&self) -> PassId {
        PassId::Phone
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !self.is_phone_line(text) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() * 2);
        for line in text.split_inclusive('\n') {
            if self.is_phone_line(line) {
                out.push_str(&replace_matches(&self.digits, line, |caps, _| {
                    self.read_digits(&caps[0])
                }));
            } else {
                out.push_str(line);
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::passes::test_support::pass;
    use crate::pass::PassId;

    #[test]
    fn test_labelled_lines_are_read_digit_by_digit() {
        let phone = pass(PassId::Phone);
        assert_eq!(
            phone.rewrite("Telefon: 621 40 30"),
            "Telefon: sechs zwee eent véier null dräi null"
        );
        assert_eq!(phone.rewrite("Tel. 26 00"), "Tel. zwee sechs null null");
    }

    #[test]
    fn test_other_lines_are_untouched() {
        let phone = pass(PassId::Phone);
        assert_eq!(
            phone.rewrite("Et kascht 25 Euro.\nTelefon 12"),
            "Et kascht 25 Euro.\nTelefon eent zwee"
        );
        assert_eq!(phone.rewrite("Ech hunn 25 Joer."), "Ech hunn 25 Joer.");
    }

    #[test]
    fn test_single_digits_are_left_for_later_passes() {
        assert_eq!(pass(PassId::Phone).rewrite("Phone 5"), "Phone 5");
    }
}
