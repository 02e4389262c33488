/// The extension of a file path's final component.
///
/// Extracted as the text after the last `.` of the last path component, with
/// both `/` and `\` accepted as separators. A component without a dot yields
/// an empty extension. This means `.gitignore` has extension `gitignore` and
/// `archive.tar.gz` has extension `gz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileExtension(pub(crate) String);

impl FileExtension {
    /// Extract the extension from a raw path string.
    ///
    /// # Examples
    ///
    /// ```
    /// use nette_lint_hooks::domain::FileExtension;
    ///
    /// assert_eq!(FileExtension::of("/app/Model.php"), "php");
    /// assert_eq!(FileExtension::of("templates/default.latte"), "latte");
    /// assert_eq!(FileExtension::of("Makefile"), "");
    /// ```
    pub fn of(path: &str) -> Self {
        let basename = path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(path);
        let ext = match basename.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => "",
        };
        FileExtension(ext.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FileExtension {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FileExtension {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_simple_file() {
        assert_eq!(FileExtension::of("foo.php").as_str(), "php");
    }

    #[test]
    fn of_absolute_path() {
        assert_eq!(FileExtension::of("/var/www/app/Model.php"), "php");
    }

    #[test]
    fn of_no_extension_is_empty() {
        assert_eq!(FileExtension::of("Makefile"), "");
    }

    #[test]
    fn of_empty_path_is_empty() {
        assert_eq!(FileExtension::of(""), "");
    }

    #[test]
    fn of_multiple_dots_takes_last() {
        assert_eq!(FileExtension::of("archive.tar.gz"), "gz");
    }

    #[test]
    fn of_dotfile_is_its_suffix() {
        assert_eq!(FileExtension::of(".gitignore"), "gitignore");
    }

    #[test]
    fn of_dot_in_directory_is_ignored() {
        // only the final component counts
        assert_eq!(FileExtension::of("/srv/v1.2/config"), "");
    }

    #[test]
    fn of_backslash_separated_path() {
        assert_eq!(FileExtension::of(r"C:\project\config.neon"), "neon");
    }

    #[test]
    fn of_trailing_dot_is_empty() {
        assert_eq!(FileExtension::of("weird."), "");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_ne!(FileExtension::of("SHOUTY.PHP"), "php");
    }

    #[test]
    fn eq_str_works() {
        assert_eq!(FileExtension::of("a.latte"), "latte");
        assert_ne!(FileExtension::of("a.latte"), "neon");
    }
}
