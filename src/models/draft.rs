use crate::models::Attachment;

/// What the user has typed and attached but not yet sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    /// Raw text as typed (not trimmed)
    pub text: String,
    /// Attached files in pick order
    pub files: Vec<Attachment>,
}

impl SubmissionDraft {
    pub fn new(text: impl Into<String>, files: Vec<Attachment>) -> Self {
        Self {
            text: text.into(),
            files,
        }
    }

    /// Text with surrounding whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// A draft can be sent when it has non-blank text or at least one file.
    pub fn is_submittable(&self) -> bool {
        !self.trimmed_text().is_empty() || !self.files.is_empty()
    }

    /// Append newly picked files after the ones already attached.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.files.extend(files);
    }

    /// Remove the file at `index`. Out of range indices leave the list untouched.
    pub fn remove_file(&mut self, index: usize) -> Option<Attachment> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    /// The only file that is transmitted with a multipart submission.
    pub fn first_file(&self) -> Option<&Attachment> {
        self.files.first()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.files.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Attachment {
        Attachment::new(name, 1, "application/octet-stream")
    }

    #[test]
    fn test_empty_draft_is_not_submittable() {
        assert!(!SubmissionDraft::default().is_submittable());
        assert!(!SubmissionDraft::new("   \n\t", Vec::new()).is_submittable());
    }

    #[test]
    fn test_text_or_file_makes_draft_submittable() {
        assert!(SubmissionDraft::new("hello", Vec::new()).is_submittable());
        assert!(SubmissionDraft::new("", vec![file("report.pdf")]).is_submittable());
    }

    #[test]
    fn test_trimmed_text() {
        let draft = SubmissionDraft::new("  hello world \n", Vec::new());
        assert_eq!(draft.trimmed_text(), "hello world");
    }

    #[test]
    fn test_add_files_accumulates() {
        let mut draft = SubmissionDraft::default();
        draft.add_files(vec![file("a.txt")]);
        draft.add_files(vec![file("b.txt"), file("c.txt")]);

        let names: Vec<_> = draft.files.iter().map(Attachment::name).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_remove_file_by_index() {
        let mut draft = SubmissionDraft::new("", vec![file("A"), file("B"), file("C")]);

        let removed = draft.remove_file(1);

        assert_eq!(removed, Some(file("B")));
        assert_eq!(draft.files, vec![file("A"), file("C")]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = SubmissionDraft::new("", vec![file("A")]);
        assert_eq!(draft.remove_file(5), None);
        assert_eq!(draft.files.len(), 1);
    }

    #[test]
    fn test_first_file_and_clear() {
        let mut draft = SubmissionDraft::new("text", vec![file("A"), file("B")]);
        assert_eq!(draft.first_file().map(Attachment::name), Some("A"));

        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.first_file().is_none());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,8}\\.(txt|pdf|csv)", 0..12)
    }

    proptest! {
        #[test]
        fn test_blank_drafts_are_never_submittable(text in "[ \t\r\n]{0,16}") {
            let draft = SubmissionDraft::new(text, Vec::new());
            prop_assert!(!draft.is_submittable());
        }

        #[test]
        fn test_add_is_append_only(first in names(), second in names()) {
            let mut draft = SubmissionDraft::default();
            draft.add_files(first.iter().map(|n| Attachment::new(n.as_str(), 1, "")));
            let before = draft.files.clone();

            draft.add_files(second.iter().map(|n| Attachment::new(n.as_str(), 1, "")));

            prop_assert_eq!(draft.files.len(), first.len() + second.len());
            prop_assert_eq!(&draft.files[..before.len()], &before[..]);
        }

        #[test]
        fn test_remove_deletes_exactly_one_position(files in names(), index in 0usize..16) {
            let attachments: Vec<_> = files.iter().map(|n| Attachment::new(n.as_str(), 1, "")).collect();
            let mut draft = SubmissionDraft::new("", attachments.clone());

            let removed = draft.remove_file(index);

            if index < attachments.len() {
                prop_assert_eq!(removed.as_ref(), Some(&attachments[index]));
                let mut expected = attachments;
                expected.remove(index);
                prop_assert_eq!(draft.files, expected);
            } else {
                prop_assert!(removed.is_none());
                prop_assert_eq!(draft.files, attachments);
            }
        }
    }
}
