// =============================================================================
// SINK — Là où les axes écrivent leurs lignes
// =============================================================================
//
// Aucun axe n'appelle println! directement : ils écrivent tous dans un
// `&mut dyn Sink`. Deux implémentations :
//   StdoutSink → la sortie standard, bufferisée (l'exécutable)
//   MemorySink → un Vec<String> (les tests, ou toute inspection)
//
// Même principe que le trait Backend d'un moteur : le cœur ne sait pas
// où vont les lignes, c'est le sink qui décide.
//
// =============================================================================

use std::io::{self, BufWriter, StdoutLock, Write};

use crate::error::CatalogResult;

/// Destination des lignes produites par les axes.
pub trait Sink {
    /// Écrit une ligne (le saut de ligne est ajouté par le sink).
    fn line(&mut self, text: &str) -> CatalogResult<()>;

    /// Écrit une ligne vide.
    fn blank(&mut self) -> CatalogResult<()> {
        self.line("")
    }
}

/// Sink vers la sortie standard, verrouillée pour toute la durée du run.
pub struct StdoutSink {
    inner: BufWriter<StdoutLock<'static>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        StdoutSink { inner: BufWriter::new(io::stdout().lock()) }
    }

    /// Vide le buffer. À appeler en fin de run pour récupérer l'erreur
    /// éventuelle (le Drop de BufWriter l'avale silencieusement).
    pub fn flush(&mut self) -> CatalogResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn line(&mut self, text: &str) -> CatalogResult<()> {
        writeln!(self.inner, "{}", text)?;
        Ok(())
    }
}

/// Sink en mémoire : garde chaque ligne telle quelle.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Nombre de lignes contenant `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.count(needle) > 0
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for MemorySink {
    fn line(&mut self, text: &str) -> CatalogResult<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
