use std::str::FromStr;

use crate::operation::{ManageDataOp, OperationBody};
use crate::xdr;
use crate::{DataValue, String64};

pub struct ManageData(ManageDataOp);

impl ManageData {
    /// Creates a new `ManageDataOp` builder with the given name and no
    /// value; without a value the entry under that name is deleted.
    pub fn new(data_name: &str) -> Result<Self, xdr::Error> {
        let data_name = String64::from_str(data_name)?;
        Ok(Self(ManageDataOp {
            data_name,
            data_value: None,
        }))
    }

    pub fn set_data_value(mut self, data_value: &[u8]) -> Result<Self, xdr::Error> {
        self.0.data_value = Some(DataValue::try_from(data_value)?);
        Ok(self)
    }
}

impl super::BuildOperation for ManageData {
    fn build_body(self) -> OperationBody {
        OperationBody::ManageData(self.0)
    }
}
