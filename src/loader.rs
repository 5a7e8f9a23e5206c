// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use futures::StreamExt;
use futures::TryStreamExt;
use futures::stream;
use mimir_core::ContentBlock;
use mimir_core::Course;
use mimir_core::CourseBuilder;
use mimir_core::ErrorReport;
use mimir_core::Fallible;
use mimir_core::parse_assignment_content;
use mimir_core::parse_course_listing;

use crate::source::CourseSource;
use crate::source::Session;

/// Default number of assignment payloads fetched at once.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Load a course: fetch the listing, then fetch every assignment's content
/// with at most `concurrency` requests in flight.
///
/// Assignments come out in listing order whatever order the fetches finish
/// in. Any failure aborts the whole load.
pub async fn load_course<S: CourseSource>(
    source: &S,
    course_id: &str,
    session: &Session,
    concurrency: usize,
) -> Fallible<Course> {
    let json = source.fetch_course(course_id, session).await?;
    let listing = parse_course_listing(&json)?;
    let mut builder = CourseBuilder::from_listing(listing)?;
    log::info!(
        "Course has {} assignment(s); fetching content",
        builder.summaries().len()
    );

    let ids: Vec<String> = builder.summaries().iter().map(|s| s.id.clone()).collect();
    let details: Vec<(String, Vec<ContentBlock>)> = stream::iter(ids)
        .map(|id| async move {
            log::debug!("Fetching assignment {id}");
            let json = source.fetch_assignment(&id, session).await?;
            let content = parse_assignment_content(&json).map_err(|e| {
                ErrorReport::new(e.kind(), format!("Assignment '{id}': {}", e.message()))
            })?;
            Ok::<_, ErrorReport>((id, content))
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    for (id, content) in details {
        builder.attach(&id, content)?;
    }
    builder.build()
}
