use super::{MessageComparer, MultiformatMessageStringComparer, PROPERTIES, TEXT, TEXTS};
use crate::compare::{reference_compares, Comparer};
use crate::model::{Message, MultiformatMessageString};
use std::cmp::Ordering;

impl Comparer<Message> for MessageComparer {
    fn compare(&self, left: &Message, right: &Message) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.text, &right.text)
            .then_with(|| TEXT.compare(&left.markdown, &right.markdown))
            .then_with(|| TEXT.compare(&left.id, &right.id))
            .then_with(|| TEXTS.compare(&left.arguments, &right.arguments))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<MultiformatMessageString> for MultiformatMessageStringComparer {
    fn compare(
        &self,
        left: &MultiformatMessageString,
        right: &MultiformatMessageString,
    ) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.text, &right.text)
            .then_with(|| TEXT.compare(&left.markdown, &right.markdown))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}
