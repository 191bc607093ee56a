use std::path::Path;

use anyhow::Context;
use globwalk::FileType;

/// Walks the files in a directory, running a given function for each file.
///
/// ```text
/// let mut walker = Walker::path(".");
///
/// walker.walk(
///     // This function is called for each file.
///     |file_path| {
///         // ... do something with the file
///         Ok(())
///     },
///     // This function is called with any error found during the walk.
///     |err| {
///         Ok(())
///     }
/// ).unwrap();
/// ```
pub struct Walker<'a> {
    /// Path to the directory that will be walked. It can also point to an
    /// individual file.
    path: &'a Path,
    /// A list of filters applied to the files being walked, those that don't
    /// match at least one of the filters are ignored.
    filters: Vec<String>,
    /// The maximum recursion depth. `None` means no limit.
    max_depth: Option<usize>,
}

impl<'a> Walker<'a> {
    /// Creates a [`Walker`] that walks a directory.
    ///
    /// `path` can also point to an individual file instead of a directory.
    pub fn path(path: &'a Path) -> Self {
        Self { path, filters: Vec::new(), max_depth: None }
    }

    /// Adds a glob pattern that controls which files will be processed.
    ///
    /// When one or more filters are added, only those files with a path that
    /// matches at least one of the filters will be processed. By default, all
    /// files are processed.
    pub fn filter(&mut self, filter: &str) -> &mut Self {
        self.filters.push(filter.to_string());
        self
    }

    /// Sets a maximum depth while traversing the directory tree.
    ///
    /// When the maximum depth is 0 only the files that reside in the given
    /// directory are processed, subdirectories are not processed. By default,
    /// subdirectories are traversed without depth limits.
    pub fn max_depth(&mut self, n: usize) -> &mut Self {
        self.max_depth = Some(n);
        self
    }

    /// Walks the directory, calling `f` for every file.
    ///
    /// The `e` function is called with any error that occurs during the walk,
    /// including errors returned by `f` itself. `e` must return `Ok(())` for
    /// continuing the walk or `Err` for aborting.
    pub fn walk<F, E>(self, mut f: F, mut e: E) -> anyhow::Result<()>
    where
        F: FnMut(&Path) -> anyhow::Result<()>,
        E: FnMut(anyhow::Error) -> anyhow::Result<()>,
    {
        let metadata = match self.path.metadata().with_context(|| {
            format!("can't open `{}`", self.path.display())
        }) {
            Ok(metadata) => metadata,
            Err(err) => {
                return e(err);
            }
        };

        if metadata.is_file() {
            if let Err(err) = f(self.path) {
                return e(err);
            }
            return Ok(());
        }

        let mut filters = self.filters;

        if filters.is_empty() {
            filters.push(String::from("**"));
        }

        let mut builder =
            globwalk::GlobWalkerBuilder::from_patterns(self.path, &filters)
                .file_type(FileType::FILE)
                .follow_links(true);

        if let Some(max_depth) = self.max_depth {
            // `GlobWalkerBuilder` sees the walked directory itself as depth
            // 0, while for `Walker` depth 0 means the files directly
            // contained in it.
            builder = builder.max_depth(max_depth.saturating_add(1));
        }

        for entry in builder.build()? {
            match entry {
                Ok(entry) => {
                    if let Err(err) = f(entry.path()) {
                        e(err)?;
                    }
                }
                Err(err) => {
                    e(err.into())?;
                }
            }
        }

        Ok(())
    }
}
