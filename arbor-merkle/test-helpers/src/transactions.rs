//! Mock wallet-to-wallet transaction records.
//!
//! A record is a single line of the form
//! `From: 0x<40 hex>, To: 0x<40 hex>, ETH: <amount with 12 decimals>`.
//! The leaf digest of a record is the SHA-256 of that exact line.

use std::{
    fmt,
    fs,
    io::{
        BufRead,
        BufReader,
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
    str::FromStr,
};

use arbor_merkle::common::{
    sum,
    Bytes32,
};
use rand::Rng;

use crate::data::TestError;

pub type Address = [u8; 20];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub eth: f64,
}

impl Transaction {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            from: random_address(rng),
            to: random_address(rng),
            eth: rng.gen::<f64>(),
        }
    }

    pub fn digest(&self) -> Bytes32 {
        sum(self.to_string())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: 0x{}, To: 0x{}, ETH: {:.12}",
            hex::encode(self.from),
            hex::encode(self.to),
            self.eth
        )
    }
}

impl FromStr for Transaction {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split(", ");
        let from = field(fields.next(), "From: 0x")?;
        let to = field(fields.next(), "To: 0x")?;
        let eth = fields
            .next()
            .and_then(|field| field.strip_prefix("ETH: "))
            .ok_or_else(|| "missing `ETH: ` field".to_string())?;
        if fields.next().is_some() {
            return Err("unexpected trailing field".to_string())
        }

        Ok(Self {
            from: address(from)?,
            to: address(to)?,
            eth: eth.parse().map_err(|err| format!("invalid amount `{eth}`: {err}"))?,
        })
    }
}

fn field<'a>(field: Option<&'a str>, prefix: &str) -> Result<&'a str, String> {
    field
        .and_then(|field| field.strip_prefix(prefix))
        .ok_or_else(|| format!("missing `{prefix}` field"))
}

fn address(hex_address: &str) -> Result<Address, String> {
    let mut address = Address::default();
    hex::decode_to_slice(hex_address, &mut address)
        .map_err(|err| format!("invalid address `{hex_address}`: {err}"))?;
    Ok(address)
}

pub fn random_address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    let mut address = Address::default();
    rng.fill(&mut address[..]);
    address
}

pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Transaction> {
    (0..count).map(|_| Transaction::random(rng)).collect()
}

/// `transactions_<count>.txt`, the name the generator gives its output.
pub fn file_name(count: usize) -> String {
    format!("transactions_{count}.txt")
}

pub fn write_to_file<P: AsRef<Path>>(
    path: P,
    transactions: &[Transaction],
) -> Result<(), TestError> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for transaction in transactions {
        writeln!(writer, "{transaction}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `count` random records into `dir` and returns the path of the file.
pub fn generate_file<R: Rng + ?Sized>(
    dir: &Path,
    count: usize,
    rng: &mut R,
) -> Result<PathBuf, TestError> {
    let path = dir.join(file_name(count));
    write_to_file(&path, &generate(count, rng))?;
    Ok(path)
}

/// Reads one record per line, exactly as written.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TestError> {
    let reader = BufReader::new(fs::File::open(path)?);
    let records = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Reads and parses every record of a data file.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, TestError> {
    load_records(path)?
        .iter()
        .enumerate()
        .map(|(line, record)| {
            record
                .parse()
                .map_err(|err| TestError::MalformedRecord(line + 1, err))
        })
        .collect()
}

pub fn hash_records<I, T>(records: I) -> Vec<Bytes32>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    records.into_iter().map(sum).collect()
}
