//! Table layouts and row mapping for every resource.

use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, Type};
use uuid::Uuid;

use super::schema::{Join, PgQuery, PgRecord, Schema};
use crate::domain::entities::{
    Car, CarStatus, City, Customer, Driver, DriverData, Trip, TripCustomer,
};

const CITY_COLUMNS: &[&str] = &["id", "name", "created_at"];
const CUSTOMER_COLUMNS: &[&str] = &["id", "full_name", "phone", "email", "created_at"];
const DRIVER_COLUMNS: &[&str] = &[
    "id",
    "full_name",
    "phone",
    "from_city_id",
    "to_city_id",
    "created_at",
];

/// Reads `<alias>__<column>` from a row produced by a joined SELECT.
fn joined<'r, T>(row: &'r PgRow, alias: &str, column: &str) -> sqlx::Result<T>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(format!("{alias}__{column}").as_str())
}

/// City embedded under `alias`; `None` when the left join matched nothing.
fn joined_city(row: &PgRow, alias: &str) -> sqlx::Result<Option<City>> {
    let Some(id) = joined::<Option<Uuid>>(row, alias, "id")? else {
        return Ok(None);
    };

    Ok(Some(City {
        id,
        name: joined(row, alias, "name")?,
        created_at: joined(row, alias, "created_at")?,
    }))
}

fn joined_customer(row: &PgRow, alias: &str) -> sqlx::Result<Option<Customer>> {
    let Some(id) = joined::<Option<Uuid>>(row, alias, "id")? else {
        return Ok(None);
    };

    Ok(Some(Customer {
        id,
        full_name: joined(row, alias, "full_name")?,
        phone: joined(row, alias, "phone")?,
        email: joined(row, alias, "email")?,
        created_at: joined(row, alias, "created_at")?,
    }))
}

fn joined_driver(row: &PgRow, alias: &str) -> sqlx::Result<Option<DriverData>> {
    let Some(id) = joined::<Option<Uuid>>(row, alias, "id")? else {
        return Ok(None);
    };

    Ok(Some(DriverData {
        id,
        full_name: joined(row, alias, "full_name")?,
        phone: joined(row, alias, "phone")?,
        from_city_id: joined(row, alias, "from_city_id")?,
        to_city_id: joined(row, alias, "to_city_id")?,
        created_at: joined(row, alias, "created_at")?,
    }))
}

impl PgRecord for City {
    const SCHEMA: Schema = Schema {
        table: "cities",
        columns: &["name"],
        read_only: &[],
        joins: &[],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(City {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query.bind(fields.name)
    }
}

impl PgRecord for Customer {
    const SCHEMA: Schema = Schema {
        table: "customers",
        columns: &["full_name", "phone", "email"],
        read_only: &[],
        joins: &[],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Customer {
            id: row.try_get("id")?,
            full_name: row.try_get("full_name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(fields.full_name)
            .bind(fields.phone)
            .bind(fields.email)
    }
}

impl PgRecord for Driver {
    const SCHEMA: Schema = Schema {
        table: "drivers",
        columns: &["full_name", "phone", "from_city_id", "to_city_id"],
        read_only: &[],
        joins: &[
            Join {
                alias: "from_city",
                table: "cities",
                foreign_key: "from_city_id",
                columns: CITY_COLUMNS,
            },
            Join {
                alias: "to_city",
                table: "cities",
                foreign_key: "to_city_id",
                columns: CITY_COLUMNS,
            },
        ],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Driver {
            id: row.try_get("id")?,
            full_name: row.try_get("full_name")?,
            phone: row.try_get("phone")?,
            from_city_id: row.try_get("from_city_id")?,
            from_city_data: joined_city(row, "from_city")?,
            to_city_id: row.try_get("to_city_id")?,
            to_city_data: joined_city(row, "to_city")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(fields.full_name)
            .bind(fields.phone)
            .bind(fields.from_city_id)
            .bind(fields.to_city_id)
    }
}

impl PgRecord for Car {
    const SCHEMA: Schema = Schema {
        table: "cars",
        columns: &["model", "brand", "number", "driver_id"],
        read_only: &["status", "from_city_id", "to_city_id"],
        joins: &[Join {
            alias: "driver",
            table: "drivers",
            foreign_key: "driver_id",
            columns: DRIVER_COLUMNS,
        }],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<CarStatus>()
            .map_err(|e| sqlx::Error::Decode(e.into()))?;

        Ok(Car {
            id: row.try_get("id")?,
            model: row.try_get("model")?,
            brand: row.try_get("brand")?,
            number: row.try_get("number")?,
            status,
            from_city_id: row.try_get("from_city_id")?,
            to_city_id: row.try_get("to_city_id")?,
            driver_id: row.try_get("driver_id")?,
            driver_data: joined_driver(row, "driver")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(fields.model)
            .bind(fields.brand)
            .bind(fields.number)
            .bind(fields.driver_id)
    }
}

impl PgRecord for Trip {
    const SCHEMA: Schema = Schema {
        table: "trips",
        columns: &[
            "trip_number_id",
            "from_city_id",
            "to_city_id",
            "driver_id",
            "price",
        ],
        read_only: &[],
        joins: &[
            Join {
                alias: "from_city",
                table: "cities",
                foreign_key: "from_city_id",
                columns: CITY_COLUMNS,
            },
            Join {
                alias: "to_city",
                table: "cities",
                foreign_key: "to_city_id",
                columns: CITY_COLUMNS,
            },
            Join {
                alias: "driver",
                table: "drivers",
                foreign_key: "driver_id",
                columns: DRIVER_COLUMNS,
            },
        ],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Trip {
            id: row.try_get("id")?,
            trip_number_id: row.try_get("trip_number_id")?,
            from_city_id: row.try_get("from_city_id")?,
            from_city_data: joined_city(row, "from_city")?,
            to_city_id: row.try_get("to_city_id")?,
            to_city_data: joined_city(row, "to_city")?,
            driver_id: row.try_get("driver_id")?,
            driver_data: joined_driver(row, "driver")?,
            price: row.try_get("price")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(fields.trip_number_id)
            .bind(fields.from_city_id)
            .bind(fields.to_city_id)
            .bind(fields.driver_id)
            .bind(fields.price)
    }
}

impl PgRecord for TripCustomer {
    const SCHEMA: Schema = Schema {
        table: "trip_customers",
        columns: &["trip_id", "customer_id"],
        read_only: &[],
        joins: &[Join {
            alias: "customer",
            table: "customers",
            foreign_key: "customer_id",
            columns: CUSTOMER_COLUMNS,
        }],
    };

    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(TripCustomer {
            id: row.try_get("id")?,
            trip_id: row.try_get("trip_id")?,
            customer_id: row.try_get("customer_id")?,
            customer_data: joined_customer(row, "customer")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_> {
        query.bind(fields.trip_id).bind(fields.customer_id)
    }
}
