//! Directory packager writing one XHTML file per chapter plus a TOC.

use std::fs;
use std::path::{Path, PathBuf};

use reprint::render::{escape_html, toc_to_json};
use reprint::{Book, Chapter, JsonFormat, Packager};

/// File name of the table of contents written next to the chapters.
pub const TOC_FILE: &str = "toc.json";

/// Writes a book into a directory.
pub struct DirectoryPackager {
    dir: PathBuf,
}

impl DirectoryPackager {
    /// Create a packager writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory.
    pub fn prepare(&self) -> reprint::Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Write a single chapter, returning its path.
    pub fn write_chapter(&self, chapter: &Chapter) -> reprint::Result<PathBuf> {
        let path = self.dir.join(&chapter.file_name);
        fs::write(&path, xhtml_document(&chapter.title, &chapter.content))?;
        Ok(path)
    }

    /// Write the table of contents, returning its path.
    pub fn write_toc(&self, book: &Book) -> reprint::Result<PathBuf> {
        let path = self.dir.join(TOC_FILE);
        fs::write(&path, toc_to_json(&book.toc, JsonFormat::Pretty)?)?;
        Ok(path)
    }
}

impl Packager for DirectoryPackager {
    fn package(&self, book: &Book) -> reprint::Result<()> {
        self.prepare()?;
        for chapter in &book.chapters {
            self.write_chapter(chapter)?;
        }
        self.write_toc(book)?;
        Ok(())
    }
}

/// Wrap a chapter body in a standalone XHTML document.
pub fn xhtml_document(title: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <!DOCTYPE html>\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\">\n\
         <head>\n<title>{}</title>\n</head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape_html(title),
        body
    )
}
