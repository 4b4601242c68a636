//! Stadium API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{Stadium, StadiumCreate, StadiumUpdate};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;
use venue_layout::{LayoutConfig, StadiumLayout};

use crate::core::ServerState;

/// GET /api/stadiums - list all stadiums
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Stadium>>> {
    let stadiums = state.stadiums().find_all().await?;
    Ok(Json(stadiums))
}

/// GET /api/stadiums/:id - fetch one stadium
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Stadium>> {
    let stadium = state
        .stadiums()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| stadium_not_found(&id))?;
    Ok(Json(stadium))
}

/// POST /api/stadiums - create a stadium
///
/// The nested Stand/Sector/Row structure is validated and stored as one
/// atomic aggregate; no network write happens when validation fails.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StadiumCreate>,
) -> AppResult<Json<Stadium>> {
    payload.validate().map_err(AppError::from)?;
    payload.validate_configuration()?;

    if state.stadiums().find_by_name(&payload.name).await?.is_some() {
        return Err(AppError::with_message(
            ErrorCode::StadiumNameExists,
            format!("Stadium {} already exists", payload.name),
        ));
    }

    let now = now_millis();
    let mut stadium = Stadium {
        id: Some(new_id()),
        name: payload.name,
        segmentation: payload.segmentation,
        image: payload.image,
        stands: payload.stands,
        sectors: payload.sectors,
        created_at: now,
        updated_at: now,
    };
    assign_missing_ids(&mut stadium);

    let stadium = state.stadiums().create(stadium).await?;
    tracing::info!(
        stadium_id = stadium.id.as_deref().unwrap_or("?"),
        name = %stadium.name,
        "stadium created"
    );
    Ok(Json(stadium))
}

/// PUT /api/stadiums/:id - update a stadium
///
/// Rejected while an event is in progress at the venue; the segmentation
/// type is immutable after creation.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StadiumUpdate>,
) -> AppResult<Json<Stadium>> {
    payload.validate().map_err(AppError::from)?;

    let mut stadium = state
        .stadiums()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| stadium_not_found(&id))?;

    // The conflict is checked before anything is touched, so a rejected
    // update leaves the stored configuration unchanged.
    if state.schedule().event_in_progress(&id).await? {
        return Err(AppError::event_in_progress(id));
    }

    if let Some(requested) = payload.segmentation
        && requested != stadium.segmentation
    {
        return Err(AppError::new(ErrorCode::SegmentationTypeLocked));
    }

    if let Some(name) = payload.name
        && name != stadium.name
    {
        if let Some(other) = state.stadiums().find_by_name(&name).await?
            && other.id != stadium.id
        {
            return Err(AppError::with_message(
                ErrorCode::StadiumNameExists,
                format!("Stadium {} already exists", name),
            ));
        }
        stadium.name = name;
    }
    if let Some(image) = payload.image {
        stadium.image = Some(image);
    }
    if let Some(stands) = payload.stands {
        stadium.stands = Some(stands);
    }
    if let Some(sectors) = payload.sectors {
        stadium.sectors = Some(sectors);
    }

    stadium.validate_configuration()?;
    assign_missing_ids(&mut stadium);
    stadium.updated_at = now_millis();

    let stadium = state.stadiums().update(&id, stadium).await?;
    tracing::info!(stadium_id = %id, "stadium updated");
    Ok(Json(stadium))
}

/// DELETE /api/stadiums/:id - delete a stadium and its whole nested
/// structure (stands/sectors/rows have no independent lifecycle)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if state.schedule().event_in_progress(&id).await? {
        return Err(AppError::event_in_progress(id));
    }

    let deleted = state.stadiums().delete(&id).await?;
    if deleted {
        tracing::info!(stadium_id = %id, "stadium deleted");
    }
    Ok(Json(deleted))
}

/// GET /api/stadiums/:id/layout - computed layout preview
///
/// Runs the layout engine over the stored stands. Sectorized venues have
/// no computed geometry (they render their background map instead).
pub async fn layout_preview(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StadiumLayout>> {
    let stadium = state
        .stadiums()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| stadium_not_found(&id))?;

    match stadium.segmentation {
        shared::models::SegmentationType::Numerated => Ok(Json(venue_layout::layout(
            stadium.stands(),
            &LayoutConfig::default(),
        ))),
        shared::models::SegmentationType::Sectorized => Err(AppError::invalid_request(
            "layout preview applies to numerated venues; sectorized venues render their background map",
        )),
    }
}

fn stadium_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::StadiumNotFound, format!("Stadium {} not found", id))
}

/// Fill in ids for any nested entity the client sent without one; the
/// aggregate is edited as a whole, so fresh rows arrive id-less.
fn assign_missing_ids(stadium: &mut Stadium) {
    let fill_sectors = |sectors: &mut Vec<shared::models::Sector>| {
        for sector in sectors {
            sector.id.get_or_insert_with(new_id);
            for row in &mut sector.rows {
                row.id.get_or_insert_with(new_id);
            }
        }
    };
    if let Some(stands) = &mut stadium.stands {
        for stand in stands {
            stand.id.get_or_insert_with(new_id);
            fill_sectors(&mut stand.sectors);
        }
    }
    if let Some(sectors) = &mut stadium.sectors {
        fill_sectors(sectors);
    }
}
