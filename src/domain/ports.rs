use crate::domain::model::CoordinateUnit;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn season_name(&self) -> &str;
    fn teams_path(&self) -> &str;
    fn schedule_path(&self) -> &str;
    fn coordinate_unit(&self) -> CoordinateUnit;
    fn report_path(&self) -> Option<&str>;
    fn pretty_report(&self) -> bool {
        true
    }
}
