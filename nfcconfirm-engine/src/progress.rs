/// At most one in-flight operation description.
///
/// `begin` overwrites whatever was there; `end` is a no-op when nothing is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSignal {
    description: Option<String>,
}

impl ProgressSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn end(&mut self) {
        self.description = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.description.as_deref()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_overwrites_and_end_is_idempotent() {
        let mut p = ProgressSignal::new();
        assert_eq!(p.current(), None);

        p.begin("logging in");
        p.begin("refreshing");
        assert_eq!(p.current(), Some("refreshing"));

        p.end();
        assert_eq!(p.current(), None);
        p.end();
        assert_eq!(p.current(), None);
    }
}
