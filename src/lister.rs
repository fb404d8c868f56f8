//! Bucket enumeration.
//!
//! [`list_all`] walks the paginated listing of a bucket to the end and
//! returns every object it found, in listing order. Pages are requested one
//! after another since each continuation token comes from the previous
//! response.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bucket_dl::lister::list_all;
//! use bucket_dl::store::{S3Config, S3Store};
//!
//! # async fn example() -> Result<(), bucket_dl::Error> {
//! let store = S3Store::new(S3Config::new("key", "secret")).await?;
//! let objects = list_all(&store, "my-bucket").await?;
//! println!("Found {} objects", objects.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::object::ObjectDescriptor;
use crate::store::RemoteStore;

use tracing::{debug, info};

/// List every object of `bucket`.
///
/// Any listing failure aborts the enumeration: a partial listing is never
/// returned.
pub async fn list_all<S>(store: &S, bucket: &str) -> Result<Vec<ObjectDescriptor>>
where
    S: RemoteStore + ?Sized,
{
    let mut objects = Vec::new();
    let mut continuation_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store
            .list_page(bucket, continuation_token.as_deref())
            .await?;
        pages += 1;
        debug!(
            page = pages,
            count = page.objects.len(),
            truncated = page.truncated,
            "Listed page"
        );

        objects.extend(page.objects);

        if !page.truncated {
            break;
        }

        match page.next_continuation_token {
            Some(token) => continuation_token = Some(token),
            None => {
                return Err(Error::remote_list(
                    bucket,
                    "truncated page without a continuation token",
                ))
            }
        }
    }

    info!("Found {} objects", objects.len());
    Ok(objects)
}
