use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    id::{TouristId, UserId},
    tourist::{event::RegisterTourist, Tourist},
};
use kernel::repository::tourist::TouristRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::tourist::TouristRow, ConnectionPool};

#[derive(new)]
pub struct TouristRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TouristRepository for TouristRepositoryImpl {
    async fn create(&self, event: RegisterTourist) -> AppResult<TouristId> {
        let tourist_id = TouristId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO tourists
                (tourist_id, user_id, first_name, last_name, email, phone,
                 age, gender, nationality, residence,
                 companions_12, companions_below_12,
                 arrival_date, departure_date, accommodation)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                        $11, $12, $13, $14, $15)
                ;
            "#,
        )
        .bind(tourist_id)
        .bind(event.user_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(event.age)
        .bind(&event.gender)
        .bind(&event.nationality)
        .bind(&event.residence)
        .bind(event.companions_12)
        .bind(event.companions_below_12)
        .bind(event.arrival_date)
        .bind(event.departure_date)
        .bind(&event.accommodation)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No tourist record has been created".into(),
            ));
        }

        Ok(tourist_id)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Tourist>> {
        let row = sqlx::query_as::<_, TouristRow>(
            r#"
                SELECT
                    tourist_id, user_id, first_name, last_name, email, phone,
                    age, gender, nationality, residence,
                    companions_12, companions_below_12,
                    arrival_date, departure_date, accommodation, created_at
                FROM tourists
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT 1
                ;
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(Tourist::from))
    }
}
