use std::collections::TryReserveError;

use rs42::extensions::vec::TryPush;

/// Splits a polygon into a fan of triangles sharing its first corner:
/// `(c1 c2 c3) (c1 c3 c4) ... (c1 cn-1 cn)`.
pub fn triangulate_face<T: Copy>(corners: &[T]) -> Result<Vec<[T; 3]>, TryReserveError> {
    // TODO write an algorithm that works with concave polygons

    (1..corners.len().saturating_sub(1)).try_fold(Vec::new(), |mut triangles, i| {
        triangles.try_push([corners[0], corners[i], corners[i + 1]])?;
        Ok(triangles)
    })
}
