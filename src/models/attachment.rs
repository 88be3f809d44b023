use send_wrapper::SendWrapper;

/// A file picked by the user, kept alongside its display metadata.
///
/// The browser `File` handle is not `Send`, so it lives behind a
/// `SendWrapper` to fit in a signal. It is only touched on the UI thread.
#[derive(Debug, Clone)]
pub struct Attachment {
    name: String,
    size: u64,
    mime_type: String,
    file: Option<SendWrapper<web_sys::File>>,
}

impl Attachment {
    /// Metadata-only attachment, with no browser file behind it.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            file: None,
        }
    }

    /// Wrap a file picked through an `<input type="file">`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
            file: Some(SendWrapper::new(file)),
        }
    }

    /// Collect every file of a picker's `FileList`, in order.
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self::from_file)
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The browser file handle, if this attachment came from a picker.
    pub fn file(&self) -> Option<&web_sys::File> {
        self.file.as_deref()
    }

    /// Human readable size, e.g. `12.5 KB`
    #[allow(clippy::cast_precision_loss)]
    pub fn display_size(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

        if self.size < 1024 {
            return format!("{} B", self.size);
        }

        let mut value = self.size as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{value:.1} {}", UNITS[unit])
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.size == other.size && self.mime_type == other.mime_type
    }
}

impl Eq for Attachment {}
