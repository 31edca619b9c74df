//! Bloom post-process: threshold, separable blur, composite.
//!
//! 1. Threshold pass - keep pixels whose luminance clears the threshold
//! 2. Runs at a reduced resolution (`RenderConfig::bloom_downsample`)
//! 3. Separable blur - horizontal then vertical, tap spacing scaled by radius
//! 4. Composite - `scene + bloom * strength` onto the output target

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::params::BloomParameters;

const FULLSCREEN_SHADER: &str = include_str!("fullscreen.wgsl");

/// Width of the soft edge above the luminosity threshold
const THRESHOLD_SMOOTH_WIDTH: f32 = 0.01;

/// Texture format of the bloom chain and the offscreen scene
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct ThresholdUniforms {
    threshold: f32,
    smooth_width: f32,
    _padding: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct BlurUniforms {
    step: [f32; 2],
    _padding: [f32; 2],
}

impl BlurUniforms {
    /// Offset between taps in UV space along `direction`
    fn new(direction: [f32; 2], radius: f32, size: (u32, u32)) -> Self {
        let radius = radius.max(0.0);
        Self {
            step: [
                direction[0] * radius / size.0.max(1) as f32,
                direction[1] * radius / size.1.max(1) as f32,
            ],
            _padding: [0.0; 2],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct CompositeUniforms {
    strength: f32,
    _padding: [f32; 3],
}

/// Bloom chain owning its intermediate targets
pub struct BloomPass {
    view_a: wgpu::TextureView,
    view_b: wgpu::TextureView,

    threshold_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,

    texture_layout: wgpu::BindGroupLayout,
    composite_layout: wgpu::BindGroupLayout,

    threshold_buffer: wgpu::Buffer,
    blur_h_buffer: wgpu::Buffer,
    blur_v_buffer: wgpu::Buffer,
    composite_buffer: wgpu::Buffer,

    threshold_bind_group: wgpu::BindGroup,
    blur_h_bind_group: wgpu::BindGroup,
    blur_v_bind_group: wgpu::BindGroup,
    composite_bind_group: wgpu::BindGroup,

    sampler: wgpu::Sampler,
    downsample: u32,
    size: (u32, u32),
}

impl BloomPass {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        downsample: u32,
    ) -> Self {
        let downsample = downsample.max(1);
        let size = bloom_size(width, height, downsample);
        let view_a = create_target(device, size, "Bloom A");
        let view_b = create_target(device, size, "Bloom B");

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Bloom Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bloom Texture Layout"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });

        let composite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bloom Composite Layout"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bloom Uniform Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let threshold_pipeline = create_pipeline(
            device,
            "Bloom Threshold",
            include_str!("bloom_threshold.wgsl"),
            HDR_FORMAT,
            &[&texture_layout, &uniform_layout],
        );
        let blur_pipeline = create_pipeline(
            device,
            "Bloom Blur",
            include_str!("bloom_blur.wgsl"),
            HDR_FORMAT,
            &[&texture_layout, &uniform_layout],
        );
        let composite_pipeline = create_pipeline(
            device,
            "Bloom Composite",
            include_str!("bloom_composite.wgsl"),
            output_format,
            &[&composite_layout, &uniform_layout],
        );

        let threshold_buffer =
            create_uniform_buffer::<ThresholdUniforms>(device, "Bloom Threshold Uniforms");
        let blur_h_buffer = create_uniform_buffer::<BlurUniforms>(device, "Bloom Blur H Uniforms");
        let blur_v_buffer = create_uniform_buffer::<BlurUniforms>(device, "Bloom Blur V Uniforms");
        let composite_buffer =
            create_uniform_buffer::<CompositeUniforms>(device, "Bloom Composite Uniforms");

        let threshold_bind_group = uniform_bind_group(device, &uniform_layout, &threshold_buffer);
        let blur_h_bind_group = uniform_bind_group(device, &uniform_layout, &blur_h_buffer);
        let blur_v_bind_group = uniform_bind_group(device, &uniform_layout, &blur_v_buffer);
        let composite_bind_group = uniform_bind_group(device, &uniform_layout, &composite_buffer);

        Self {
            view_a,
            view_b,
            threshold_pipeline,
            blur_pipeline,
            composite_pipeline,
            texture_layout,
            composite_layout,
            threshold_buffer,
            blur_h_buffer,
            blur_v_buffer,
            composite_buffer,
            threshold_bind_group,
            blur_h_bind_group,
            blur_v_bind_group,
            composite_bind_group,
            sampler,
            downsample,
            size,
        }
    }

    /// Recreate the intermediate targets for a new viewport size
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let size = bloom_size(width, height, self.downsample);
        if size == self.size {
            return;
        }
        debug!("Resizing bloom targets to {}x{}", size.0, size.1);
        self.view_a = create_target(device, size, "Bloom A");
        self.view_b = create_target(device, size, "Bloom B");
        self.size = size;
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Run the chain from `scene` into `output`
    ///
    /// With strength ≤ 0 only the composite runs, at zero strength, which
    /// copies the scene through unchanged.
    pub fn process(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        scene: &wgpu::TextureView,
        output: &wgpu::TextureView,
        params: &BloomParameters,
    ) {
        if params.is_enabled() {
            let threshold = ThresholdUniforms {
                threshold: params.threshold,
                smooth_width: THRESHOLD_SMOOTH_WIDTH,
                _padding: [0.0; 2],
            };
            queue.write_buffer(&self.threshold_buffer, 0, bytemuck::bytes_of(&threshold));
            queue.write_buffer(
                &self.blur_h_buffer,
                0,
                bytemuck::bytes_of(&BlurUniforms::new([1.0, 0.0], params.radius, self.size)),
            );
            queue.write_buffer(
                &self.blur_v_buffer,
                0,
                bytemuck::bytes_of(&BlurUniforms::new([0.0, 1.0], params.radius, self.size)),
            );

            // scene -> A -> B -> A
            self.filter_pass(
                device,
                encoder,
                "Bloom Threshold Pass",
                &self.threshold_pipeline,
                scene,
                &self.view_a,
                &self.threshold_bind_group,
            );
            self.filter_pass(
                device,
                encoder,
                "Bloom Blur H Pass",
                &self.blur_pipeline,
                &self.view_a,
                &self.view_b,
                &self.blur_h_bind_group,
            );
            self.filter_pass(
                device,
                encoder,
                "Bloom Blur V Pass",
                &self.blur_pipeline,
                &self.view_b,
                &self.view_a,
                &self.blur_v_bind_group,
            );
        }

        let composite = CompositeUniforms {
            strength: params.strength.max(0.0),
            _padding: [0.0; 3],
        };
        queue.write_buffer(&self.composite_buffer, 0, bytemuck::bytes_of(&composite));
        self.composite_pass(device, encoder, scene, output);
    }

    #[allow(clippy::too_many_arguments)]
    fn filter_pass(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        pipeline: &wgpu::RenderPipeline,
        input: &wgpu::TextureView,
        output: &wgpu::TextureView,
        uniforms: &wgpu::BindGroup,
    ) {
        let textures = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(input),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut pass = begin_pass(encoder, label, output);
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, &textures, &[]);
        pass.set_bind_group(1, uniforms, &[]);
        pass.draw(0..3, 0..1);
    }

    fn composite_pass(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        scene: &wgpu::TextureView,
        output: &wgpu::TextureView,
    ) {
        let textures = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bloom Composite Textures"),
            layout: &self.composite_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(scene),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&self.view_a),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut pass = begin_pass(encoder, "Bloom Composite Pass", output);
        pass.set_pipeline(&self.composite_pipeline);
        pass.set_bind_group(0, &textures, &[]);
        pass.set_bind_group(1, &self.composite_bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

fn bloom_size(width: u32, height: u32, downsample: u32) -> (u32, u32) {
    ((width / downsample).max(1), (height / downsample).max(1))
}

fn create_target(device: &wgpu::Device, size: (u32, u32), label: &str) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: HDR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn create_uniform_buffer<T>(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn uniform_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Bloom Uniform Bind Group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    fragment_source: &str,
    format: wgpu::TextureFormat,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let source = format!("{}\n{}", FULLSCREEN_SHADER, fragment_source);
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn begin_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    label: &str,
    output: &wgpu::TextureView,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: output,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    })
}
