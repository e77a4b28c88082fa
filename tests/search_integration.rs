use gitnote_core::error::GitnoteError;
use gitnote_core::notebook::Notebook;
use gitnote_core::search::SearchOptions;
use std::fs;
use tempfile::TempDir;

fn notebook_with(files: &[(&str, &str)]) -> Result<(TempDir, Notebook), GitnoteError> {
    let tmpdir = TempDir::new()?;
    for (file, body) in files {
        let path = tmpdir.path().join(file);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(&path, body)?;
    }
    let notebook = Notebook::open(tmpdir.path())?;
    Ok((tmpdir, notebook))
}

fn sample() -> Result<(TempDir, Notebook), GitnoteError> {
    notebook_with(&[
        ("2025-01-01 meeting notes.md", "# meeting notes\n"),
        (
            "work/2025-01-02 project update.md",
            "# project update\n\nDiscussed in the Meeting on Monday.\n",
        ),
        ("2025-01-03 random thoughts.md", "# random thoughts\n"),
    ])
}

fn titles(notes: &[gitnote_core::Note]) -> Vec<&str> {
    notes.iter().map(|n| n.title.as_str()).collect()
}

#[test]
fn shallow_search_matches_titles_only() -> Result<(), GitnoteError> {
    let (_tmp, notebook) = sample()?;

    let hits = notebook.search().search("meeting", false)?;
    assert_eq!(titles(&hits), vec!["meeting notes"]);

    Ok(())
}

#[test]
fn deep_search_also_matches_contents() -> Result<(), GitnoteError> {
    let (_tmp, notebook) = sample()?;

    let hits = notebook
        .search()
        .search_with_options("meeting", &SearchOptions { deep: true })?;
    assert_eq!(titles(&hits), vec!["meeting notes", "project update"]);

    Ok(())
}

#[test]
fn title_search_ignores_case() -> Result<(), GitnoteError> {
    let (_tmp, notebook) = sample()?;

    let hits = notebook.search().search("RANDOM", false)?;
    assert_eq!(titles(&hits), vec!["random thoughts"]);

    Ok(())
}

#[test]
fn empty_query_matches_everything_in_path_order() -> Result<(), GitnoteError> {
    let (_tmp, notebook) = sample()?;

    let hits = notebook.search().search("", false)?;
    let paths: Vec<&str> = hits.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "2025-01-01 meeting notes.md",
            "2025-01-03 random thoughts.md",
            "work/2025-01-02 project update.md",
        ]
    );

    Ok(())
}

#[test]
fn shallow_results_are_a_subset_of_deep_results() -> Result<(), GitnoteError> {
    let (_tmp, notebook) = sample()?;

    for query in ["", "meeting", "monday", "notes", "zzz", "E"] {
        let shallow = notebook.search().search(query, false)?;
        let deep = notebook.search().search(query, true)?;
        for note in &shallow {
            assert!(deep.contains(note), "{query:?}: {} missing from deep", note.path);
        }
    }

    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_note_is_skipped_by_deep_search() -> Result<(), GitnoteError> {
    let (tmp, notebook) = sample()?;
    std::os::unix::fs::symlink(
        tmp.path().join("does-not-exist"),
        tmp.path().join("2025-01-04 dangling.md"),
    )?;

    let hits = notebook.search().search("meeting", true)?;
    assert_eq!(titles(&hits), vec!["meeting notes", "project update"]);

    let hits = notebook.search().search("dangling", true)?;
    assert_eq!(titles(&hits), vec!["dangling"]);

    Ok(())
}

#[test]
fn search_fails_when_root_is_missing() {
    let tmpdir = TempDir::new().unwrap();
    let notebook = Notebook::new(tmpdir.path().join("missing"));

    assert!(notebook.search().search("x", false).is_err());
}
