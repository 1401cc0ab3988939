use std::{env, time::Instant};

use relevance_scorer::{
    Document, Hits, Index, IndexCache, RangeBoundaries, TokenProfile,
};

// 検索パネルと同じサンプル文書セット
fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "Machine Learning Pipeline",
            "ML pipeline for model training and inference with automated MLOps workflows",
            "Comprehensive machine learning pipeline that handles data preprocessing, model training, validation, and deployment with continuous integration and monitoring capabilities for production environments.",
            "AI/ML",
        ),
        Document::new(
            "2",
            "Data Analytics Dashboard",
            "Real-time analytics dashboard for business intelligence",
            "Interactive dashboard providing real-time insights into business metrics, KPIs, and performance indicators with customizable visualizations and automated reporting features.",
            "Analytics",
        ),
        Document::new(
            "3",
            "API Gateway Service",
            "Microservices API gateway with load balancing and authentication",
            "Scalable API gateway that manages microservices communication, handles authentication, rate limiting, load balancing, and provides comprehensive logging and monitoring.",
            "Infrastructure",
        ),
        Document::new(
            "4",
            "Database Optimization Engine",
            "Automated database performance optimization and query tuning",
            "Advanced database optimization engine that analyzes query performance, suggests index improvements, and automatically tunes database configurations for optimal performance.",
            "Database",
        ),
        Document::new(
            "5",
            "Cloud Security Framework",
            "Enterprise cloud security framework with compliance monitoring",
            "Comprehensive security framework for cloud environments including threat detection, vulnerability assessment, compliance monitoring, and automated security policy enforcement.",
            "Security",
        ),
        Document::new(
            "6",
            "DevOps Automation Platform",
            "CI/CD automation platform for streamlined software delivery",
            "Complete DevOps automation platform that streamlines continuous integration, deployment pipelines, infrastructure as code, and provides comprehensive monitoring and alerting.",
            "DevOps",
        ),
        Document::new(
            "7",
            "Real-time Data Processing",
            "Stream processing engine for real-time data analytics",
            "High-performance stream processing engine that handles real-time data ingestion, transformation, and analytics with support for complex event processing and machine learning integration.",
            "Data Processing",
        ),
        Document::new(
            "8",
            "Mobile App Backend",
            "Scalable backend services for mobile applications",
            "Robust backend infrastructure for mobile applications including user management, push notifications, offline synchronization, and real-time messaging capabilities.",
            "Mobile",
        ),
        Document::new(
            "9",
            "Blockchain Integration Layer",
            "Enterprise blockchain integration with smart contract management",
            "Enterprise-grade blockchain integration layer that provides smart contract deployment, transaction management, and seamless integration with existing business systems.",
            "Blockchain",
        ),
        Document::new(
            "10",
            "AI-Powered Recommendation System",
            "Machine learning recommendation engine for personalized content",
            "Advanced recommendation system using collaborative filtering, content-based filtering, and deep learning algorithms to provide personalized recommendations across various domains.",
            "AI/ML",
        ),
    ]
}

fn print_usage() {
    eprintln!("Usage: relevance-scorer [--query \"TEXT\"]");
    eprintln!("If --query omitted, an interactive prompt is started.");
}

fn run_query(index: &Index, total_docs: usize, query: &str) {
    let start = Instant::now();
    let hits = index.rank(query);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    eprintln!(
        "[time] rank={:.2}ms results={} total_docs={}",
        elapsed_ms,
        hits.len(),
        total_docs
    );
    if hits.is_empty() {
        println!("(no results above the similarity floor)");
        return;
    }
    for hit in hits.iter() {
        println!(
            "{:>5.1}%\tdoc {}{}{}",
            hit.similarity_percent,
            hit.doc_id,
            if hit.exact_match { "\t[exact]" } else { "\t" },
            if hit.word_overlap > 0 {
                format!("\t{} words overlap", hit.word_overlap)
            } else {
                String::new()
            }
        );
    }
    print_histogram(&hits);
}

fn print_histogram(hits: &Hits) {
    let bounds = RangeBoundaries::default();
    println!("--- similarity histogram ---");
    for (range, count) in bounds.bucket_counts(hits) {
        println!("{:>7}% | {}", range.label(), "#".repeat(count));
    }
}

fn main() {
    let mut query_opt: Option<String> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--query" => {
                if let Some(text) = args.next() {
                    query_opt = Some(text);
                } else {
                    eprintln!("[error] --query requires text");
                    return;
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                // 位置引数をクエリとして解釈 (最初のみ)
                if query_opt.is_none() {
                    query_opt = Some(other.to_string());
                } else {
                    eprintln!("[warn] extra arg ignored: {}", other);
                }
            }
        }
    }

    let docs = sample_documents();
    let profile = TokenProfile::corpus_search();
    let build_start = Instant::now();
    let mut cache: IndexCache = IndexCache::new();
    let index = cache.get_or_build(&docs, &profile);
    eprintln!(
        "[info] indexed {} documents ({} terms)",
        index.doc_num(),
        index.stats.dim()
    );
    eprintln!(
        "[time] build_index={:.2}ms",
        build_start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(query) = query_opt {
        run_query(&index, docs.len(), &query);
        return;
    }

    // ---- 対話ループ ----
    use std::io::{self, Write};
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Query> ");
        let _ = stdout.flush();
        let mut line = String::new();
        if stdin.read_line(&mut line).is_err() {
            eprintln!("[error] read error");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("exit")
            || trimmed.eq_ignore_ascii_case("quit")
        {
            eprintln!("[info] bye");
            break;
        }
        run_query(&index, docs.len(), trimmed);
    }
}
