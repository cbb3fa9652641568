use std::fmt;

/// The mode a [`FileHandle`](crate::FileHandle) is opened with.
///
/// Each mode maps to a fixed set of capabilities:
///
/// | Mode | Read | Write | Truncates on open | Starts at |
/// | --- | --- | --- | --- | --- |
/// | `Read` | yes | no | no | 0 |
/// | `Write` | no | yes | yes | 0 |
/// | `ReadWrite` | yes | yes | no | 0 |
/// | `Append` | no | no | no | end |
/// | `WriteAppend` | no | yes | no | end |
/// | `ReadWriteAppend` | yes | yes | no | end |
///
/// Plain `Append` only moves the cursor to the end; it grants neither read
/// nor write access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    Read,
    Write,
    ReadWrite,
    Append,
    WriteAppend,
    ReadWriteAppend,
}

impl FileMode {
    /// Every mode, in declaration order.
    pub const ALL: [FileMode; 6] = [
        FileMode::Read,
        FileMode::Write,
        FileMode::ReadWrite,
        FileMode::Append,
        FileMode::WriteAppend,
        FileMode::ReadWriteAppend,
    ];

    pub const fn is_readable(self) -> bool {
        matches!(
            self,
            FileMode::Read | FileMode::ReadWrite | FileMode::ReadWriteAppend
        )
    }

    pub const fn is_writable(self) -> bool {
        matches!(
            self,
            FileMode::Write
                | FileMode::ReadWrite
                | FileMode::WriteAppend
                | FileMode::ReadWriteAppend
        )
    }

    /// Whether a handle in this mode may cut the file at its cursor.
    pub const fn can_truncate(self) -> bool { self.is_writable() }

    /// Whether opening in this mode empties the file.
    pub const fn truncates_on_open(self) -> bool { matches!(self, FileMode::Write) }

    /// Whether a fresh handle starts at the end of the file instead of at 0.
    pub const fn starts_at_end(self) -> bool {
        matches!(
            self,
            FileMode::Append | FileMode::WriteAppend | FileMode::ReadWriteAppend
        )
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileMode::Read => "read",
            FileMode::Write => "write",
            FileMode::ReadWrite => "read/write",
            FileMode::Append => "append",
            FileMode::WriteAppend => "write/append",
            FileMode::ReadWriteAppend => "read/write/append",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        let table = [
            (FileMode::Read, true, false, false, false),
            (FileMode::Write, false, true, true, false),
            (FileMode::ReadWrite, true, true, false, false),
            (FileMode::Append, false, false, false, true),
            (FileMode::WriteAppend, false, true, false, true),
            (FileMode::ReadWriteAppend, true, true, false, true),
        ];

        for (mode, readable, writable, clears, at_end) in table {
            assert_eq!(mode.is_readable(), readable, "{mode}");
            assert_eq!(mode.is_writable(), writable, "{mode}");
            assert_eq!(mode.truncates_on_open(), clears, "{mode}");
            assert_eq!(mode.starts_at_end(), at_end, "{mode}");
        }
    }

    #[test]
    fn test_truncate_allowed_only_for_writable_modes() {
        let allowed: Vec<_> = FileMode::ALL
            .into_iter()
            .filter(|mode| mode.can_truncate())
            .collect();
        assert_eq!(
            allowed,
            [
                FileMode::Write,
                FileMode::ReadWrite,
                FileMode::WriteAppend,
                FileMode::ReadWriteAppend
            ]
        );
    }
}
