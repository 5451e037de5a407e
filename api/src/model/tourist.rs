use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{TouristId, UserId},
    tourist::{event::RegisterTourist, Tourist},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTouristRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(range(min = 1, max = 120))]
    pub age: i32,
    #[garde(length(min = 1))]
    pub gender: String,
    #[garde(length(min = 1))]
    pub nationality: String,
    #[garde(length(min = 1))]
    pub residence: String,
    #[garde(range(min = 0))]
    pub companions_12: i32,
    #[garde(range(min = 0))]
    pub companions_below_12: i32,
    #[garde(skip)]
    pub arrival_date: NaiveDate,
    #[garde(skip)]
    pub departure_date: NaiveDate,
    #[garde(length(min = 1))]
    pub accommodation: String,
}

impl RegisterTouristRequest {
    pub fn into_register_tourist(self, user_id: UserId) -> RegisterTourist {
        let RegisterTouristRequest {
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
        } = self;
        RegisterTourist {
            user_id,
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristResponse {
    pub tourist_id: TouristId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
    pub residence: String,
    pub companions_12: i32,
    pub companions_below_12: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub accommodation: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tourist> for TouristResponse {
    fn from(value: Tourist) -> Self {
        let Tourist {
            tourist_id,
            user_id,
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
            created_at,
        } = value;
        Self {
            tourist_id,
            user_id,
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterTouristRequest {
        RegisterTouristRequest {
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            email: "maria@example.com".into(),
            phone: "09171234567".into(),
            age: 28,
            gender: "female".into(),
            nationality: "Filipino".into(),
            residence: "Manila".into(),
            companions_12: 2,
            companions_below_12: 0,
            arrival_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            departure_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            accommodation: "Coco Beach Resort".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(request().validate(&()).is_ok());
    }

    #[test]
    fn negative_companion_count_is_rejected() {
        let mut req = request();
        req.companions_below_12 = -1;
        assert!(req.validate(&()).is_err());
    }
}
