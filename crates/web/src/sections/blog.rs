// =============================================================================
// NexusCorp Web - Blog Section
// =============================================================================
// Search box filters the posts on every keystroke.
// =============================================================================

use leptos::prelude::*;
use nexus_common::{filter_posts, BlogPost, CATALOG};

use crate::components::{Glyph, Icon, SectionHeading};

#[component]
pub fn BlogSection() -> impl IntoView {
    // State
    let search_query = RwSignal::new(String::new());

    let filtered = Memo::new(move |_| search_query.with(|query| filter_posts(CATALOG.blog_posts, query)));

    view! {
        <section id="blog" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-end mb-16 gap-8">
                    <div>
                        <SectionHeading eyebrow="Insights & News" title="Thoughts on the future of business" />
                    </div>
                    <div class="relative w-full md:w-80">
                        <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-400">
                            <Icon glyph=Glyph::Search class="w-5 h-5" />
                        </span>
                        <input
                            type="text"
                            name="blog-search"
                            placeholder="Search articles..."
                            class="w-full pl-12 pr-4 py-3 rounded-xl border border-slate-200 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all"
                            prop:value=move || search_query.get()
                            on:input=move |e| search_query.set(event_target_value(&e))
                        />
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    <For
                        each=move || filtered.get()
                        key=|post| post.id
                        children=move |post| view! { <BlogCard post=post /> }
                    />
                </div>

                <Show when=move || filtered.with(|posts| posts.is_empty())>
                    <p class="text-center text-slate-500 py-12 blog-empty">
                        "No articles match \"" {move || search_query.get()} "\"."
                    </p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn BlogCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="group cursor-pointer blog-post" data-post=post.id>
            <div class="mb-6 overflow-hidden rounded-2xl bg-slate-100 aspect-[16/10] relative">
                <div class="absolute top-4 left-4 z-10">
                    <span class="bg-white px-3 py-1 rounded-full text-xs font-bold text-blue-600 shadow-sm">
                        {post.category}
                    </span>
                </div>
                <div class="w-full h-full group-hover:scale-105 transition-transform duration-500 bg-gradient-to-br from-blue-500 to-blue-900"></div>
            </div>
            <div class="flex items-center gap-4 text-sm text-slate-500 mb-3">
                <span class="flex items-center gap-1">
                    <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                    {post.date}
                </span>
                <span>"•"</span>
                <span>{post.author}</span>
            </div>
            <h4 class="text-xl font-bold text-slate-900 mb-3 group-hover:text-blue-600 transition-colors">
                {post.title}
            </h4>
            <p class="text-slate-600 text-sm leading-relaxed line-clamp-2">{post.excerpt}</p>
        </article>
    }
}
