//! Native lazy loading of the page images.

use crate::prelude::*;

use crate::config::Selectors;
use crate::controller::effects;



/// Set `loading="lazy"` on every matching image without a `loading` value. Returns the number of
/// updated images.
pub fn apply(logger:&Logger, selectors:&Selectors) -> FallibleResult<usize> {
    let logger  = logger.sub("LazyImages");
    let images  = web::query_selector_all(&selectors.images)?;
    let mut count = 0;
    for image in images {
        let loading = image.get_attribute("loading");
        if effects::needs_lazy_loading(loading.as_deref()) {
            image.set_attribute("loading",effects::LAZY_LOADING).map_err(web::Error::from)?;
            count += 1;
        }
    }
    debug!(logger, "Lazy loading enabled for {} images.", count);
    Ok(count)
}
