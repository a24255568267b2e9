use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::StakingRequestStream;
use crate::domain::{Error, StakingAction, StakingRequest};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    validator: String,
    #[serde(default)]
    amount: String,
}

impl TryFrom<CsvRow> for StakingRequest {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let action = match row.action.to_ascii_lowercase().as_str() {
            "stake" => StakingAction::Stake,
            "unstake" => StakingAction::Unstake,
            other => {
                return Err(Error::Ingestion(format!(
                    "Invalid staking action: {}",
                    other
                )));
            }
        };

        if row.validator.is_empty() {
            return Err(Error::Ingestion("Missing validator account".to_string()));
        }

        Ok(StakingRequest {
            action,
            validator: row.validator,
            amount: row.amount,
        })
    }
}

impl<R: Read + Send + 'static> StakingRequestStream for CsvReader<R> {
    type RequestStream = Pin<Box<dyn Stream<Item = Result<StakingRequest, Error>> + Send>>;

    fn stream(&mut self) -> Self::RequestStream {
        // A second call yields nothing; the reader is consumed by the first.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => return Box::pin(stream::empty::<Result<StakingRequest, Error>>()),
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => StakingRequest::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
