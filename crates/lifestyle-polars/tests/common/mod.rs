//! Common test utilities for lifestyle-polars tests

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "Person ID,Gender,Age,Occupation,Sleep Duration,Quality of Sleep,\
Physical Activity Level,Stress Level,BMI Category,Blood Pressure,Heart Rate,Daily Steps,Sleep Disorder";

/// A small slice of the sleep health dataset
pub fn sample_rows() -> Vec<String> {
    let rows = [
        "1,Male,27,Software Engineer,6.1,6,42,6,Overweight,126/83,77,4200,None",
        "2,Male,28,Doctor,6.2,6,60,8,Normal,125/80,75,10000,None",
        "3,Male,28,Doctor,6.2,6,60,8,Normal,125/80,75,10000,None",
        "4,Male,28,Sales Representative,5.9,4,30,8,Obese,140/90,85,3000,Sleep Apnea",
        "5,Male,28,Sales Representative,5.9,4,30,8,Obese,140/90,85,3000,Sleep Apnea",
        "6,Male,28,Software Engineer,5.9,4,30,8,Obese,140/90,85,3000,Insomnia",
        "7,Male,29,Teacher,6.3,6,40,7,Obese,140/90,82,3500,Insomnia",
        "8,Male,29,Doctor,7.8,7,75,6,Normal,120/80,70,8000,None",
        "9,Male,29,Doctor,7.8,7,75,6,Normal,120/80,70,8000,None",
        "10,Male,29,Doctor,7.8,7,75,6,Normal,120/80,70,8000,None",
        "11,Male,29,Doctor,6.1,6,30,8,Normal,120/80,70,8000,None",
        "12,Male,29,Doctor,7.8,7,75,6,Normal,120/80,70,8000,None",
    ];
    rows.iter().map(|r| r.to_string()).collect()
}

/// Write CSV text to a temporary file that lives as long as the handle
pub fn write_csv(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn sample_csv() -> NamedTempFile {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in sample_rows() {
        text.push_str(&row);
        text.push('\n');
    }
    write_csv(&text)
}
