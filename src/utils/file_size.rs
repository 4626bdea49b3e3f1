use crate::error::VaultError;

pub struct FileSizeUtils;

impl FileSizeUtils {
    const UNITS: [&'static str; 4] = ["Bytes", "KB", "MB", "GB"];
    const STEP: u64 = 1024;

    /// Scales `size` to the largest unit that keeps the value at or above 1.
    /// GB is the ceiling, so a terabyte is reported as `1024 GB`.
    pub fn format_size(size: u64) -> String {
        if size == 0 {
            return "0 Bytes".to_string();
        }

        let mut unit_index = 0;
        let mut divisor = 1u64;
        while unit_index < Self::UNITS.len() - 1 && size >= divisor * Self::STEP {
            divisor *= Self::STEP;
            unit_index += 1;
        }

        let value = size as f64 / divisor as f64;
        format!("{} {}", Self::trim_decimals(value), Self::UNITS[unit_index])
    }

    pub fn try_format_size(size: i64) -> Result<String, VaultError> {
        let size = u64::try_from(size).map_err(|_| {
            VaultError::invalid_argument(format!("byte count must be non-negative, got {}", size))
        })?;
        Ok(Self::format_size(size))
    }

    // Two decimals at most, ties rounded up, without trailing zeros:
    // 1.125 -> 1.13, 1.50 -> 1.5, 2.00 -> 2.
    fn trim_decimals(value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        let fixed = format!("{:.2}", rounded);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
