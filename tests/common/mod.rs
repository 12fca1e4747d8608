//! Shared fixtures for end-to-end tests

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "Person ID,Gender,Age,Occupation,Sleep Duration,Quality of Sleep,\
Physical Activity Level,Stress Level,BMI Category,Blood Pressure,Heart Rate,Daily Steps,Sleep Disorder";

/// Twelve records; heart rates 86 and 84 lie above the upper fence
pub const ROWS: [&str; 12] = [
    "1,Male,27,Software Engineer,6.1,6,42,6,Overweight,126/83,70,4200,None",
    "2,Male,28,Doctor,6.2,6,60,8,Normal,125/80,86,10000,None",
    "3,Female,28,Nurse,6.5,7,60,5,Normal,120/80,72,7000,None",
    "4,Male,28,Sales Representative,5.9,4,30,8,Obese,140/90,68,3000,Sleep Apnea",
    "5,Female,29,Teacher,7.1,8,45,4,Normal,118/76,74,6000,None",
    "6,Male,29,Software Engineer,5.9,4,30,8,Obese,140/90,70,3000,Insomnia",
    "7,Male,30,Teacher,6.3,6,40,7,Obese,140/90,84,3500,Insomnia",
    "8,Female,31,Doctor,7.8,7,75,6,Normal,120/80,72,8000,None",
    "9,Male,31,Lawyer,7.7,8,90,5,Normal,125/82,76,8000,None",
    "10,Female,32,Accountant,7.2,8,60,4,Normal,115/75,70,7000,None",
    "11,Male,33,Engineer,8.1,9,75,3,Normal,117/76,74,8000,None",
    "12,Female,35,Nurse,7.4,7,60,5,Overweight,130/85,72,7000,None",
];

pub fn write_csv(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn dataset_csv() -> NamedTempFile {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in ROWS {
        text.push_str(row);
        text.push('\n');
    }
    write_csv(&text)
}
