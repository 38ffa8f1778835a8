//! Parsing the precomputed OWLSim similarity caches and term tables
//!
//! Both formats are plain, tab-separated text files. Empty lines and lines
//! starting with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{PhenodigmError, PhenodigmResult};

/// Reads all relevant lines of a file and hands them to `parse_line`
fn parse<P, T, F>(file: P, parse_line: F) -> PhenodigmResult<Vec<T>>
where
    P: AsRef<Path>,
    F: Fn(&str) -> PhenodigmResult<T>,
{
    let filename = file.as_ref().display().to_string();
    let file = File::open(file).map_err(|_| PhenodigmError::CannotOpenFile(filename))?;
    read(BufReader::new(file), parse_line)
}

fn read<R, T, F>(reader: R, parse_line: F) -> PhenodigmResult<Vec<T>>
where
    R: BufRead,
    F: Fn(&str) -> PhenodigmResult<T>,
{
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|err| PhenodigmError::InvalidInput(err.to_string()))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_line(&line)?);
    }
    Ok(records)
}

/// Module to parse the OWLSim term-pair similarity cache
///
/// Each line holds the similarity of one source (query) term and one
/// target term:
///
/// ```text
/// HP:0001166  HP:0001238  0.3125  5.055448136114318   HP:0001238;
/// HP:0001166  MP:0000572  0.45    4.6 HP:0001155;UBERON:0002398;
/// ```
///
/// The columns are:
///
/// 1. Source term ID
/// 2. Target term ID
/// 3. Jaccard similarity (`simJ`)
/// 4. Information content of the most informative common ancestor
/// 5. `;`-separated list of the most informative common ancestors
pub mod owlsim {
    use std::io::BufRead;
    use std::path::Path;

    use smallvec::SmallVec;
    use tracing::trace;

    use crate::term::TermId;
    use crate::{PhenodigmError, PhenodigmResult, DEFAULT_NUM_ANCESTORS};

    /// A single line of the OWLSim cache
    #[derive(Debug, Clone)]
    pub struct CacheRecord {
        source: TermId,
        target: TermId,
        simj: f64,
        ic: f64,
        ancestors: SmallVec<[TermId; DEFAULT_NUM_ANCESTORS]>,
    }

    impl CacheRecord {
        /// The source (query) term
        pub fn source(&self) -> &TermId {
            &self.source
        }

        /// The target (matched) term
        pub fn target(&self) -> &TermId {
            &self.target
        }

        /// The Jaccard similarity
        pub fn simj(&self) -> f64 {
            self.simj
        }

        /// The information content of the common ancestor
        pub fn ic(&self) -> f64 {
            self.ic
        }

        /// The most informative common ancestors that are phenotype terms
        pub fn ancestors(&self) -> &[TermId] {
            &self.ancestors
        }
    }

    /// Parses a single line of the cache
    ///
    /// # Errors
    ///
    /// [`PhenodigmError::InvalidInput`] if a column is missing or cannot be parsed,
    /// if `simJ` is not within `[0, 1]` or if `IC` is negative or not finite
    pub fn parse_line(line: &str) -> PhenodigmResult<CacheRecord> {
        let invalid = || PhenodigmError::InvalidInput(line.to_string());
        let mut cols = line.split('\t');

        let Some(source) = cols.next() else {
            return Err(invalid());
        };
        let Some(target) = cols.next() else {
            return Err(invalid());
        };
        let Some(simj) = cols.next() else {
            return Err(invalid());
        };
        let Some(ic) = cols.next() else {
            return Err(invalid());
        };

        let source = TermId::try_from(source).map_err(|_| invalid())?;
        let target = TermId::try_from(target).map_err(|_| invalid())?;
        let simj = simj.trim().parse::<f64>().map_err(|_| invalid())?;
        let ic = ic.trim().parse::<f64>().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&simj) || !ic.is_finite() || ic < 0.0 {
            return Err(invalid());
        }

        let mut ancestors = SmallVec::new();
        for ancestor in cols.next().unwrap_or_default().split(';') {
            if ancestor.trim().is_empty() {
                continue;
            }
            match TermId::try_from(ancestor) {
                Ok(id) => ancestors.push(id),
                Err(_) => trace!("Skipping ancestor {}", ancestor),
            }
        }

        Ok(CacheRecord {
            source,
            target,
            simj,
            ic,
            ancestors,
        })
    }

    /// Parses all records from a reader
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line
    pub fn read<R: BufRead>(reader: R) -> PhenodigmResult<Vec<CacheRecord>> {
        super::read(reader, parse_line)
    }

    /// Parses all records of a cache file
    ///
    /// # Errors
    ///
    /// - [`PhenodigmError::CannotOpenFile`] if the file is not readable
    /// - [`PhenodigmError::InvalidInput`] for the first malformed line
    pub fn parse_file<P: AsRef<Path>>(file: P) -> PhenodigmResult<Vec<CacheRecord>> {
        super::parse(file, parse_line)
    }
}

/// Module to parse term tables
///
/// ```text
/// HP:0001166  Arachnodactyly
/// HP:0001382  Joint hypermobility
/// ```
pub mod terms {
    use std::io::BufRead;
    use std::path::Path;

    use crate::term::{PhenotypeTerm, TermId};
    use crate::{PhenodigmError, PhenodigmResult};

    /// Parses a single `id \t label` line
    ///
    /// # Errors
    ///
    /// [`PhenodigmError::InvalidInput`] if the ID is invalid
    pub fn parse_line(line: &str) -> PhenodigmResult<PhenotypeTerm> {
        let (id, label) = line.split_once('\t').unwrap_or((line, ""));
        let id = TermId::try_from(id).map_err(|_| PhenodigmError::InvalidInput(line.to_string()))?;
        Ok(PhenotypeTerm::new(id, label.trim()))
    }

    /// Parses all terms from a reader
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line
    pub fn read<R: BufRead>(reader: R) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        super::read(reader, parse_line)
    }

    /// Parses all terms of a term table file
    ///
    /// # Errors
    ///
    /// - [`PhenodigmError::CannotOpenFile`] if the file is not readable
    /// - [`PhenodigmError::InvalidInput`] for the first malformed line
    pub fn parse_file<P: AsRef<Path>>(file: P) -> PhenodigmResult<Vec<PhenotypeTerm>> {
        super::parse(file, parse_line)
    }
}
