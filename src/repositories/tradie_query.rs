//! Translation of a [`TradieFilter`] into MongoDB aggregation stages.
//!
//! `$geoNear` has to be the first stage of a pipeline, so location filters
//! are expressed there rather than in `$match`. `$geoNear` reports distances
//! in metres; the final `$addFields` converts them to kilometres.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document, Regex};

use crate::constants::{COLLECTION_SERVICES, METERS_PER_KM};
use crate::models::{GeoPoint, LocationFilter, LocationMode, TradieFilter, TradieStatus};

/// `$match` predicates for everything except the distance bound.
pub fn match_document(filter: &TradieFilter) -> Document {
    let mut matcher = doc! { "status": filter.status.as_str() };

    if let Some(availability) = filter.availability {
        matcher.insert("availability_status", availability.as_str());
    }

    if let Some(service_id) = filter.service_id {
        matcher.insert("service_ids", service_id);
    }

    if let Some(region) = &filter.region {
        matcher.insert(
            "region",
            doc! { "$regex": case_insensitive(format!("^{}$", regex::escape(region))) },
        );
    }

    let mut rate = doc! {};
    if let Some(min) = filter.min_rate {
        rate.insert("$gte", min);
    }
    if let Some(max) = filter.max_rate {
        rate.insert("$lte", max);
    }
    if !rate.is_empty() {
        matcher.insert("hourly_rate", rate);
    }

    if let Some(years) = filter.min_experience {
        matcher.insert("years_experience", doc! { "$gte": i64::from(years) });
    }

    if let Some(search) = &filter.search {
        let pattern = case_insensitive(regex::escape(search));
        matcher.insert(
            "$or",
            vec![
                doc! { "first_name": { "$regex": &pattern } },
                doc! { "last_name": { "$regex": &pattern } },
                doc! { "business_name": { "$regex": &pattern } },
            ],
        );
    }

    if let Some(LocationFilter {
        mode: LocationMode::ServiceRadius,
        ..
    }) = filter.location
    {
        // Tradies without a service_radius resolve to a negative bound and never match
        matcher.insert(
            "$expr",
            doc! {
                "$lte": [
                    "$distance",
                    { "$multiply": [{ "$ifNull": ["$service_radius", -1.0] }, METERS_PER_KM] }
                ]
            },
        );
    }

    matcher
}

/// `$geoNear` stage for a location filter.
pub fn geo_near_stage(location: &LocationFilter) -> Document {
    let mut stage = doc! {
        "near": GeoPoint::new(location.latitude, location.longitude).to_document(),
        "distanceField": "distance",
        "spherical": true,
        "key": "location",
    };

    if let LocationMode::Radius(km) = location.mode {
        stage.insert("maxDistance", km * METERS_PER_KM);
    }

    doc! { "$geoNear": stage }
}

/// Nearest first for location searches, insertion order otherwise.
pub fn sort_stage(filter: &TradieFilter) -> Document {
    if filter.location.is_some() {
        doc! { "$sort": { "distance": 1, "_id": 1 } }
    } else {
        doc! { "$sort": { "_id": 1 } }
    }
}

pub fn lookup_services_stage() -> Document {
    doc! {
        "$lookup": {
            "from": COLLECTION_SERVICES,
            "localField": "service_ids",
            "foreignField": "_id",
            "as": "services",
        }
    }
}

fn filter_stages(filter: &TradieFilter) -> Vec<Document> {
    let mut stages = Vec::with_capacity(2);
    if let Some(location) = &filter.location {
        stages.push(geo_near_stage(location));
    }
    stages.push(doc! { "$match": match_document(filter) });
    stages
}

/// Pipeline producing one page of tradies with services joined.
pub fn page_pipeline(filter: &TradieFilter, skip: u64, limit: u64) -> Vec<Document> {
    let mut pipeline = filter_stages(filter);
    pipeline.push(sort_stage(filter));
    pipeline.push(doc! { "$skip": i64::try_from(skip).unwrap_or(i64::MAX) });
    pipeline.push(doc! { "$limit": i64::try_from(limit).unwrap_or(i64::MAX) });
    pipeline.push(lookup_services_stage());

    if filter.location.is_some() {
        pipeline.push(doc! {
            "$addFields": { "distance": { "$divide": ["$distance", METERS_PER_KM] } }
        });
    }

    pipeline
}

/// Pipeline yielding a single `{ total }` document, or nothing when no tradie matches.
pub fn count_pipeline(filter: &TradieFilter) -> Vec<Document> {
    let mut pipeline = filter_stages(filter);
    pipeline.push(doc! { "$count": "total" });
    pipeline
}

pub fn by_id_pipeline(id: ObjectId, status: TradieStatus) -> Vec<Document> {
    vec![
        doc! { "$match": { "_id": id, "status": status.as_str() } },
        doc! { "$limit": 1 },
        lookup_services_stage(),
    ]
}

/// Read the `total` produced by `$count`, which may come back as int32 or int64.
pub fn read_total(document: &Document) -> u64 {
    match document.get("total") {
        Some(Bson::Int32(n)) => u64::try_from(*n).unwrap_or(0),
        Some(Bson::Int64(n)) => u64::try_from(*n).unwrap_or(0),
        _ => 0,
    }
}

fn case_insensitive(pattern: String) -> Regex {
    Regex {
        pattern,
        options: "i".to_string(),
    }
}
