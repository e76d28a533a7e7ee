//! Page path resolution

use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;

use super::PageError;
use super::resolve::Resolution;
use crate::ScopeDefinition;

/// Resolve the absolute path of a scope's page.
///
/// Pure: the filesystem is never touched. `~` in `base_path` is expanded to
/// the home directory.
pub fn resolve_path(
    scope: &ScopeDefinition,
    base_path: &str,
    reference_date: NaiveDateTime,
    inputs: &[String],
) -> Result<PathBuf, PageError> {
    let resolution = Resolution::new(reference_date, inputs)
        .with_name(&scope.name)
        .with_example(scope.example.as_deref());
    resolve_with(&resolution, scope, base_path)
}

pub(crate) fn resolve_with(
    resolution: &Resolution<'_>,
    scope: &ScopeDefinition,
    base_path: &str,
) -> Result<PathBuf, PageError> {
    resolution.validate(&[scope.path_pattern.as_str(), scope.filename_pattern.as_str()])?;

    let directory = resolution.apply(&scope.path_pattern)?;
    let stem = sanitize_filename(&resolution.apply(&scope.filename_pattern)?);

    let mut path = expand_home(base_path);
    push_normalized(&mut path, Path::new(&directory));
    push_normalized(&mut path, Path::new(&with_extension(&stem, &scope.extension)));
    Ok(path)
}

/// Spaces in a filename become underscores
pub fn sanitize_filename(stem: &str) -> String {
    stem.replace(' ', "_")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

fn with_extension(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{}.{}", stem, extension)
    }
}

/// Append `relative` below `base`, dropping empty, `.` and root components.
///
/// `..` is resolved lexically but never climbs above `base`.
fn push_normalized(base: &mut PathBuf, relative: &Path) {
    let floor = base.components().count();
    for component in relative.components() {
        match component {
            Component::Normal(part) => base.push(part),
            Component::ParentDir => {
                if base.components().count() > floor {
                    base.pop();
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 11, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn scope(path: &str, filename: &str, extension: &str) -> ScopeDefinition {
        ScopeDefinition::new("meeting", path, filename, extension, None, None).unwrap()
    }

    #[test]
    fn test_resolve_meeting_path() {
        let meeting = scope("meetings/{d:%B_%y}", "{d:%a_%d_%m_%y}-{input0}", "md");
        let path =
            resolve_path(&meeting, "/home/u/tembo", date(), &["standup".to_string()]).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/u/tembo/meetings/November_21/Sun_21_11_21-standup.md")
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let meeting = scope("meetings/{d:%B_%y}", "{d:%a_%d_%m_%y}-{input0}", "md");
        let inputs = vec!["standup".to_string()];
        let first = resolve_path(&meeting, "/base", date(), &inputs).unwrap();
        let second = resolve_path(&meeting, "/base", date(), &inputs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_missing_input() {
        let meeting = scope("meetings/{d:%B_%y}", "{d:%a_%d_%m_%y}-{input0}", "md");
        match resolve_path(&meeting, "/home/u/tembo", date(), &[]) {
            Err(PageError::InputArity {
                expected, actual, ..
            }) => assert_eq!((expected, actual), (1, 0)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_reported_before_missing_input() {
        let notes = scope("notes/{d:%Q}", "{input0}", "md");
        match resolve_path(&notes, "/notes", date(), &[]) {
            Err(PageError::TokenFormat { pattern, .. }) => assert_eq!(pattern, "notes/{d:%Q}"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_spaces_replaced_in_filename_only() {
        let wtodo = scope("Week {d:%W}", "week {d:%W}", "todo");
        let path = resolve_path(&wtodo, "/notes", date(), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/notes/Week 46/week_46.todo"));
    }

    #[test]
    fn test_spaces_in_input_directory_kept() {
        let knowledge = scope("knowledge/{input0}", "{input1}", "md");
        let inputs = vec!["my project".to_string(), "some note".to_string()];
        let path = resolve_path(&knowledge, "/notes", date(), &inputs).unwrap();
        assert_eq!(path, PathBuf::from("/notes/knowledge/my project/some_note.md"));
    }

    #[test]
    fn test_extension_leading_dot_stripped() {
        let page = scope("some_path", "some_filename", ".md");
        let path = resolve_path(&page, "/notes", date(), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/notes/some_path/some_filename.md"));
    }

    #[test]
    fn test_redundant_separators_normalized() {
        let page = scope("./a//b/../c/", "note", "md");
        let path = resolve_path(&page, "/notes/", date(), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/notes/a/c/note.md"));
    }

    #[test]
    fn test_directory_cannot_escape_base() {
        let page = scope("/../../etc", "note", "md");
        let path = resolve_path(&page, "/notes", date(), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/notes/etc/note.md"));
    }

    #[test]
    fn test_name_token_in_filename() {
        let page = scope("some_path", "name_token_{name}", "md");
        let path = resolve_path(&page, "/notes", date(), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/notes/some_path/name_token_meeting.md"));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/tembo"), home.join("tembo"));
            assert_eq!(expand_home("~"), home);
        }
        assert_eq!(expand_home("/abs/tembo"), PathBuf::from("/abs/tembo"));
        assert_eq!(expand_home("~other/tembo"), PathBuf::from("~other/tembo"));
    }
}
