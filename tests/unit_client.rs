// Unit tests for the Semantic Scholar wire types.
//
// Tests serde deserialization of search and citation pages and their
// conversion into Publication records — all without network access.

use citerank::scholar::models::{CitationsResponse, Publication, SearchResponse};

#[test]
fn deserialize_empty_search() {
    let json = r#"{"total": 0, "offset": 0, "data": []}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.total, Some(0));
    assert!(resp.data.is_empty());
}

#[test]
fn deserialize_search_hit() {
    let json = r#"{
        "total": 1234,
        "offset": 0,
        "next": 1,
        "data": [{
            "paperId": "204e3073870fae3d05bcbc2f6a8e263d9b72e776",
            "title": "Attention is All you Need",
            "abstract": "The dominant sequence transduction models are based on complex recurrent…",
            "authors": [
                {"authorId": "40348417", "name": "Ashish Vaswani"},
                {"authorId": "1846258", "name": "Noam M. Shazeer"}
            ],
            "openAccessPdf": {"url": "https://arxiv.org/pdf/1706.03762", "status": "GREEN"},
            "externalIds": {"ArXiv": "1706.03762", "DBLP": "conf/nips/VaswaniSPUJGKP17"}
        }]
    }"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    let publication = Publication::from(resp.data.into_iter().next().unwrap());

    assert_eq!(
        publication.paper_id.as_deref(),
        Some("204e3073870fae3d05bcbc2f6a8e263d9b72e776")
    );
    assert_eq!(publication.title, "Attention is All you Need");
    assert_eq!(
        publication.author.as_deref(),
        Some("Ashish Vaswani and Noam M. Shazeer")
    );
    assert_eq!(
        publication.eprint.as_deref(),
        Some("https://arxiv.org/pdf/1706.03762")
    );
    assert!(publication.abstract_text.unwrap().ends_with('…'));
}

#[test]
fn deserialize_citation_page_with_null_abstract() {
    let json = r#"{
        "offset": 0,
        "next": 100,
        "data": [
            {"citingPaper": {"paperId": "a1", "title": "One", "abstract": null, "authors": [], "openAccessPdf": null, "externalIds": null}},
            {"citingPaper": {"paperId": "b2", "title": "Two", "abstract": "text", "authors": []}}
        ]
    }"#;
    let page: CitationsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(page.next, Some(100));
    assert_eq!(page.data.len(), 2);

    let pubs: Vec<Publication> = page
        .data
        .into_iter()
        .map(|edge| Publication::from(edge.citing_paper))
        .collect();
    assert!(pubs[0].abstract_text.is_none());
    assert!(pubs[0].author.is_none());
    assert!(pubs[0].eprint.is_none());
    assert_eq!(pubs[1].abstract_text.as_deref(), Some("text"));
}

#[test]
fn deserialize_last_citation_page() {
    let json = r#"{"offset": 200, "data": []}"#;
    let page: CitationsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(page.offset, 200);
    assert!(page.next.is_none());
    assert!(page.data.is_empty());
}

#[test]
fn arxiv_fallback_when_no_open_access_pdf() {
    let json = r#"{"data": [{"paperId": "x", "title": "T", "openAccessPdf": {"url": ""}, "externalIds": {"ArXiv": "2101.00001"}}]}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    let publication = Publication::from(resp.data.into_iter().next().unwrap());
    assert_eq!(
        publication.eprint.as_deref(),
        Some("https://arxiv.org/abs/2101.00001")
    );
}
