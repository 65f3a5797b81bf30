use crate::error::{Result, SearchError};
use crate::index::{IdfTable, TfTable};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Locations of a collection's source and index files: `<root>/<collection>.{xml,idf,tf}`.
#[derive(Debug, Clone)]
pub struct IndexPaths {
    pub root: PathBuf,
    pub collection: String,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P, collection: &str) -> Self {
        Self { root: root.as_ref().to_path_buf(), collection: collection.to_string() }
    }
    fn with_ext(&self, ext: &str) -> PathBuf { self.root.join(format!("{}.{ext}", self.collection)) }
    pub fn xml(&self) -> PathBuf { self.with_ext("xml") }
    pub fn idf(&self) -> PathBuf { self.with_ext("idf") }
    pub fn tf(&self) -> PathBuf { self.with_ext("tf") }
}

/// One `<term>\t<idf>` line per term, sorted by term.
pub fn save_idf(paths: &IndexPaths, idf: &IdfTable) -> Result<()> {
    let mut f = BufWriter::new(File::create(paths.idf())?);
    for (term, value) in idf {
        writeln!(f, "{term}\t{value}")?;
    }
    f.flush()?;
    Ok(())
}

pub fn load_idf(paths: &IndexPaths) -> Result<IdfTable> {
    let path = paths.idf();
    let mut idf = IdfTable::new();
    for_each_record(&path, 2, |line, fields| {
        let value = parse_value(&path, line, fields[1])?;
        if idf.insert(fields[0].to_string(), value).is_some() {
            return Err(SearchError::format(&path, line, format!("duplicate term {:?}", fields[0])));
        }
        Ok(())
    })?;
    Ok(idf)
}

/// One `<doc>\t<term>\t<tf>` line per (document, term), sorted by document then term.
/// Documents with an empty row produce no lines.
pub fn save_tf(paths: &IndexPaths, tf: &TfTable) -> Result<()> {
    let mut f = BufWriter::new(File::create(paths.tf())?);
    for (doc_id, row) in tf {
        for (term, value) in row {
            writeln!(f, "{doc_id}\t{term}\t{value}")?;
        }
    }
    f.flush()?;
    Ok(())
}

pub fn load_tf(paths: &IndexPaths) -> Result<TfTable> {
    let path = paths.tf();
    let mut tf = TfTable::new();
    for_each_record(&path, 3, |line, fields| {
        let value = parse_value(&path, line, fields[2])?;
        let row = tf.entry(fields[0].to_string()).or_default();
        if row.insert(fields[1].to_string(), value).is_some() {
            return Err(SearchError::format(
                &path,
                line,
                format!("duplicate term {:?} for document {:?}", fields[1], fields[0]),
            ));
        }
        Ok(())
    })?;
    Ok(tf)
}

fn for_each_record<F>(path: &Path, expected: usize, mut f: F) -> Result<()>
where
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != expected {
            return Err(SearchError::format(
                path,
                i + 1,
                format!("expected {expected} tab-separated fields, found {}", fields.len()),
            ));
        }
        f(i + 1, &fields)?;
    }
    Ok(())
}

fn parse_value(path: &Path, line: usize, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SearchError::format(path, line, format!("invalid number {raw:?}"))),
    }
}
