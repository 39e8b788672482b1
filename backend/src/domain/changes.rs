//! Partial-update helpers shared by the content change sets.
//!
//! A change set carries `Option` fields: `None` means "not submitted" and
//! leaves the stored value untouched.

/// Overwrite `target` only when a value was submitted.
pub(crate) fn overwrite<T>(target: &mut T, submitted: Option<T>) {
    if let Some(value) = submitted {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_target_when_nothing_submitted() {
        let mut title = String::from("Original");
        overwrite(&mut title, None);
        assert_eq!(title, "Original");
    }

    #[test]
    fn replaces_target_when_submitted() {
        let mut end_date = Some(3);
        overwrite(&mut end_date, Some(None));
        assert_eq!(end_date, None);
    }
}
