//! Resolved option value object

/// A leaf looked up by flat index, paired with its effective disabled state.
///
/// `option` is `None` when the index did not name a leaf. An absent option is
/// never reported as disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedOption<O> {
    pub disabled: bool,
    pub option: Option<O>,
}

impl<O> ResolvedOption<O> {
    pub fn new(option: O, disabled: bool) -> Self {
        Self {
            disabled,
            option: Some(option),
        }
    }

    /// The "nothing at this index" result
    pub fn absent() -> Self {
        Self {
            disabled: false,
            option: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.option.is_none()
    }

    /// The option, if present and selectable
    pub fn selectable(self) -> Option<O> {
        if self.disabled {
            None
        } else {
            self.option
        }
    }
}

impl<O> Default for ResolvedOption<O> {
    fn default() -> Self {
        Self::absent()
    }
}
