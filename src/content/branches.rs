//! Static branch records for the chain.
//!
//! This is the raw, read-only input the catalog builder consumes at load
//! time. Records carry no coordinates; those are derived by place-table
//! geocoding. The hours strings are kept exactly as the business publishes
//! them, inconsistent casing included.

use crate::domain::StoreStatus;

/// A raw branch record as supplied by the content team.
#[derive(Debug, Clone, Copy)]
pub struct BranchRecord {
    pub name_en: &'static str,
    pub name_ar: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub status: StoreStatus,
}

/// Main contact number used when a branch has no dedicated line.
pub const MAIN_PHONE: &str = "+966503695826";

/// The chain's branch network.
pub const BRANCHES: &[BranchRecord] = &[
    BranchRecord {
        name_en: "Thahama Market- AL Rahmaniyah, Al Hamdaniyah",
        name_ar: "Thahama Market- AL Rahmaniyah, Al Hamdaniyah",
        address: "Jeddah",
        phone: "+966535218674",
        hours: "24 hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market - Al Riyadh District, North Jeddah",
        name_ar: "Thahama Market - Al Riyadh District, North Jeddah",
        address: "Jeddah",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market- Naqleen Fuel Station, Wadi Qudaid, Makkah-Madinah Expressway",
        name_ar: "Thahama Market- Naqleen Fuel Station, Wadi Qudaid, Makkah-Madinah Expressway",
        address: "Wadi Qudaid",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market- Al Faisaliyah, Khulais",
        name_ar: "Thahama Market- Al Faisaliyah, Khulais",
        address: "Khulais",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market- Gulf Fuel Station, Wadi Stharah, Makkah-Madinah Expressway",
        name_ar: "Thahama Market- Gulf Fuel Station, Wadi Stharah, Makkah-Madinah Expressway",
        address: "Wadi Stharah",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market- Duba, Tabuk",
        name_ar: "Thahama Market- Duba, Tabuk",
        address: "Duba, Tabuk",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Company For Nuts and Spices- Al Qaseem",
        name_ar: "Thahama Company For Nuts and Spices- Al Qaseem",
        address: "Al Qaseem",
        phone: MAIN_PHONE,
        hours: "8:00 Am - 4:00Am",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Trading For Hardwares AND Building Materials- Al Jumoom, Makkah",
        name_ar: "Thahama Trading For Hardwares AND Building Materials- Al Jumoom, Makkah",
        address: "Al Jumoom, Makkah",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Thahama Market- Darb Petrol Station, Al Sharaya, Makkah",
        name_ar: "Thahama Market- Darb Petrol Station, Al Sharaya, Makkah",
        address: "Al Sharaya, Makkah",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Barbee Cafe- Naqleen Fuel Station, Wadi Qudaid, Makkah-Madinah Expressway",
        name_ar: "Barbee Cafe- Naqleen Fuel Station, Wadi Qudaid, Makkah-Madinah Expressway",
        address: "Wadi Qudaid",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Barbee Cafe- Al Sharaya",
        name_ar: "Barbee Cafe- Al Sharaya",
        address: "Al Sharaya",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Barbee Cafe- Asfan Road",
        name_ar: "Barbee Cafe- Asfan Road",
        address: "Asfan Road",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Barbee Cafe-  Gulf Fuel Station, Abyar, Makkah-Madinah Expressway",
        name_ar: "Barbee Cafe-  Gulf Fuel Station, Abyar, Makkah-Madinah Expressway",
        address: "Abyar",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Arabica Star- Aldrees Fuel Station Asfan Road",
        name_ar: "Arabica Star- Aldrees Fuel Station Asfan Road",
        address: "Asfan Road",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Liba Fast Food- Fadco Petrol Station, Asfan, Makkah-Madinah Expressway",
        name_ar: "Liba Fast Food- Fadco Petrol Station, Asfan, Makkah-Madinah Expressway",
        address: "Asfan",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Sulthana Fast Food- Gulf Fuel Station, Abyar, Makkah-Madinah Expressway",
        name_ar: "Sulthana Fast Food- Gulf Fuel Station, Abyar, Makkah-Madinah Expressway",
        address: "Abyar",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Liba Fast Food- Al Faisaliyah, Khulais",
        name_ar: "Liba Fast Food- Al Faisaliyah, Khulais",
        address: "Khulais",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
    BranchRecord {
        name_en: "Liba Restaurant- Darb Petrol Station, Al Sharaya, Makkah",
        name_ar: "Liba Restaurant- Darb Petrol Station, Al Sharaya, Makkah",
        address: "Al Sharaya, Makkah",
        phone: MAIN_PHONE,
        hours: "24 Hours",
        status: StoreStatus::Open,
    },
];
